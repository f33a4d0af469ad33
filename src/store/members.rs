//! Member roster operations on LibraryStore

use validator::Validate;

use super::LibraryStore;
use crate::{
    error::{AppError, AppResult, Entity},
    models::{ActivityType, Member, MemberId, NewMember, UpdateMember},
};

impl LibraryStore {
    /// Register a member with no books on loan
    pub fn add_member(&mut self, data: NewMember) -> AppResult<Member> {
        data.validate()?;

        let member = Member {
            id: MemberId::generate(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            membership_date: self.today(),
            status: data.status,
            borrowed_books: 0,
        };
        self.members.insert(member.id.clone(), member.clone());

        let actor = self.settings.librarian_name.clone();
        self.record_activity(
            ActivityType::AddMember,
            format!("New member {} registered", member.name),
            actor,
        );
        tracing::info!("Registered member {} ({})", member.id, member.name);

        Ok(member)
    }

    pub fn update_member(&mut self, id: &MemberId, data: UpdateMember) -> AppResult<Member> {
        data.validate()?;
        let updated = self.get_member(id)?.merged(data);

        self.members.insert(id.clone(), updated.clone());
        tracing::info!("Updated member {} (status: {})", id, updated.status);
        Ok(updated)
    }

    /// Remove a member. Members with books still on loan are kept.
    pub fn delete_member(&mut self, id: &MemberId) -> AppResult<Member> {
        self.get_member(id)?;

        let active = self.active_borrow_count_for_member(id);
        if active > 0 {
            tracing::warn!("Refusing to delete member {}: {} active borrow(s)", id, active);
            return Err(AppError::HasActiveBorrows {
                entity: Entity::Member,
                id: id.to_string(),
                count: active,
            });
        }

        let member = self
            .members
            .shift_remove(id)
            .ok_or_else(|| AppError::not_found(Entity::Member, id))?;
        tracing::info!("Deleted member {} ({})", member.id, member.name);
        Ok(member)
    }

    pub(crate) fn active_borrow_count_for_member(&self, id: &MemberId) -> usize {
        self.records
            .values()
            .filter(|r| r.is_active() && &r.member_id == id)
            .count()
    }
}
