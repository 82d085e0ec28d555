//! Roles Mapping Step
//!
//! An open-ended list of roles, one of them active. Skill and trait edits
//! always apply to the active role.

use serde::{Deserialize, Serialize};

use crate::entity::{find_by_id, Entity};
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: u32,
    pub title: String,
    pub skills: Vec<String>,
    pub traits: Vec<String>,
}

impl Role {
    pub fn new(id: u32, title: String) -> Self {
        Self {
            id,
            title,
            skills: Vec::new(),
            traits: Vec::new(),
        }
    }
}

impl Entity for Role {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Which list of the active role an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleList {
    Skills,
    Traits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolesMapping {
    pub roles: Vec<Role>,
    pub active_role_id: u32,
    next_id: u32,
}

impl Default for RolesMapping {
    fn default() -> Self {
        Self {
            roles: vec![Role {
                id: 1,
                title: "Software Engineer".to_string(),
                skills: vec![
                    "Programming".to_string(),
                    "Problem Solving".to_string(),
                    "Testing".to_string(),
                ],
                traits: vec![
                    "Analytical Thinking".to_string(),
                    "Attention to Detail".to_string(),
                ],
            }],
            active_role_id: 1,
            next_id: 2,
        }
    }
}

impl RolesMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active role; the first role if the active id is stale
    pub fn active_role(&self) -> Option<&Role> {
        find_by_id(&self.roles, self.active_role_id)
            .map(|i| &self.roles[i])
            .or_else(|| self.roles.first())
    }

    /// Append a role and make it active
    pub fn add_role(&self, title: &str) -> DomainResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("empty role title".to_string()));
        }
        let mut next = self.clone();
        let id = next.next_id;
        next.next_id += 1;
        next.roles.push(Role::new(id, title.to_string()));
        next.active_role_id = id;
        Ok(next)
    }

    pub fn select_role(&self, id: u32) -> DomainResult<Self> {
        if find_by_id(&self.roles, id).is_none() {
            return Err(DomainError::NotFound(format!("role {}", id)));
        }
        Ok(Self {
            active_role_id: id,
            ..self.clone()
        })
    }

    pub fn add_skill(&self, skill: &str) -> DomainResult<Self> {
        self.add_entry(RoleList::Skills, skill)
    }

    pub fn remove_skill(&self, skill: &str) -> DomainResult<Self> {
        self.remove_entry(RoleList::Skills, skill)
    }

    pub fn add_trait(&self, name: &str) -> DomainResult<Self> {
        self.add_entry(RoleList::Traits, name)
    }

    pub fn remove_trait(&self, name: &str) -> DomainResult<Self> {
        self.remove_entry(RoleList::Traits, name)
    }

    fn add_entry(&self, list: RoleList, entry: &str) -> DomainResult<Self> {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(DomainError::InvalidInput(format!("empty {:?} entry", list)));
        }
        self.edit_active(list, |items| {
            if items.iter().any(|i| i == entry) {
                return Err(DomainError::Duplicate(entry.to_string()));
            }
            items.push(entry.to_string());
            Ok(())
        })
    }

    fn remove_entry(&self, list: RoleList, entry: &str) -> DomainResult<Self> {
        self.edit_active(list, |items| {
            items.retain(|i| i != entry);
            Ok(())
        })
    }

    fn edit_active<F>(&self, list: RoleList, edit: F) -> DomainResult<Self>
    where
        F: FnOnce(&mut Vec<String>) -> DomainResult<()>,
    {
        let id = self
            .active_role()
            .map(|r| r.id)
            .ok_or_else(|| DomainError::NotFound("active role".to_string()))?;
        let mut next = self.clone();
        let index = find_by_id(&next.roles, id)
            .ok_or_else(|| DomainError::NotFound(format!("role {}", id)))?;
        let role = &mut next.roles[index];
        match list {
            RoleList::Skills => edit(&mut role.skills)?,
            RoleList::Traits => edit(&mut role.traits)?,
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_role_is_active() {
        let roles = RolesMapping::new();
        let active = roles.active_role().unwrap();
        assert_eq!(active.title, "Software Engineer");
        assert_eq!(active.skills.len(), 3);
        assert_eq!(active.traits.len(), 2);
    }

    #[test]
    fn test_add_role_becomes_active() {
        let roles = RolesMapping::new().add_role("  Data Analyst ").unwrap();
        assert_eq!(roles.roles.len(), 2);
        let active = roles.active_role().unwrap();
        assert_eq!(active.title, "Data Analyst");
        assert!(active.skills.is_empty());
        assert_ne!(active.id, 1);
    }

    #[test]
    fn test_role_ids_are_unique() {
        let roles = RolesMapping::new()
            .add_role("A")
            .unwrap()
            .add_role("B")
            .unwrap();
        let mut ids: Vec<u32> = roles.roles.iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_blank_role_rejected() {
        assert!(RolesMapping::new().add_role("   ").is_err());
    }

    #[test]
    fn test_select_role() {
        let roles = RolesMapping::new().add_role("Designer").unwrap();
        let roles = roles.select_role(1).unwrap();
        assert_eq!(roles.active_role().unwrap().title, "Software Engineer");
        assert!(matches!(roles.select_role(42), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_skill_edits_apply_to_active_role() {
        let roles = RolesMapping::new()
            .add_role("Designer")
            .unwrap()
            .add_skill("Figma")
            .unwrap();
        assert_eq!(roles.active_role().unwrap().skills, vec!["Figma".to_string()]);
        assert_eq!(roles.roles[0].skills.len(), 3);

        let roles = roles.remove_skill("Figma").unwrap();
        assert!(roles.active_role().unwrap().skills.is_empty());
    }

    #[test]
    fn test_trait_edits_reject_duplicates() {
        let roles = RolesMapping::new();
        assert!(matches!(
            roles.add_trait("Attention to Detail"),
            Err(DomainError::Duplicate(_))
        ));
        let roles = roles.add_trait("Curiosity").unwrap();
        assert_eq!(roles.active_role().unwrap().traits.len(), 3);
        let roles = roles.remove_trait("Curiosity").unwrap();
        assert_eq!(roles.active_role().unwrap().traits.len(), 2);
    }

    #[test]
    fn test_stale_active_id_falls_back_to_first() {
        let roles = RolesMapping {
            active_role_id: 99,
            ..RolesMapping::new()
        };
        assert_eq!(roles.active_role().unwrap().id, 1);
        let roles = roles.add_skill("Rust").unwrap();
        assert!(roles.roles[0].skills.contains(&"Rust".to_string()));
    }
}
