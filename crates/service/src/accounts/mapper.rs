use models::bank_account;
use sea_orm::{NotSet, Set};

use super::domain::BankAccountDto;

/// Stateless converter between [`BankAccountDto`] and the stored entity.
///
/// Both directions destructure their input completely, so adding a column
/// without mapping it fails to compile.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankAccountMapper;

impl BankAccountMapper {
    pub fn new() -> Self { Self }

    pub fn to_dto(&self, model: &bank_account::Model) -> BankAccountDto {
        let bank_account::Model { id, account_number, account_holder_name, balance } = model;
        BankAccountDto {
            id: Some(*id),
            account_number: account_number.clone(),
            account_holder_name: account_holder_name.clone(),
            balance: *balance,
        }
    }

    /// `id` is carried over only when the DTO has one.
    pub fn to_entity(&self, dto: &BankAccountDto) -> bank_account::ActiveModel {
        let BankAccountDto { id, account_number, account_holder_name, balance } = dto;
        bank_account::ActiveModel {
            id: match id {
                Some(id) => Set(*id),
                None => NotSet,
            },
            account_number: Set(account_number.clone()),
            account_holder_name: Set(account_holder_name.clone()),
            balance: Set(*balance),
        }
    }

    pub fn map_dto(&self, model: Option<&bank_account::Model>) -> Option<BankAccountDto> {
        model.map(|m| self.to_dto(m))
    }

    pub fn map_entity(&self, dto: Option<&BankAccountDto>) -> Option<bank_account::ActiveModel> {
        dto.map(|d| self.to_entity(d))
    }
}
