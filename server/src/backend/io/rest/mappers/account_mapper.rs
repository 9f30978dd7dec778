//! server/src/backend/io/rest/mappers/account_mapper.rs

use crate::backend::domain::commands::accounts::{CreateAccountCommand, UpdateAccountCommand};
use crate::backend::domain::commands::ledger::{
    DepositCommand, TransferCommand, TransferResult, WithdrawCommand,
};
use crate::backend::domain::models::{Account as DomainAccount, AccountId};
use shared::{
    Account as SharedAccount, AccountListResponse, CreateAccountRequest, MoneyMovementRequest,
    TransferResponse, UpdateAccountRequest,
};

/// Wire format of `created_time` / `modified_time`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Mapper to convert between shared account DTOs and domain types.
pub struct AccountMapper;

impl AccountMapper {
    /// Converts a domain Account to a shared Account DTO.
    pub fn to_dto(domain: DomainAccount) -> SharedAccount {
        SharedAccount {
            id: domain.id,
            name: domain.name,
            balance: domain.balance,
            created_time: domain.created_time.format(TIMESTAMP_FORMAT).to_string(),
            modified_time: domain.modified_time.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn to_dto_list(domain_accounts: Vec<DomainAccount>) -> AccountListResponse {
        domain_accounts.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_transfer_dto(result: TransferResult) -> TransferResponse {
        [Self::to_dto(result.source), Self::to_dto(result.target)]
    }

    pub fn to_withdraw_command(request: &MoneyMovementRequest) -> WithdrawCommand {
        WithdrawCommand {
            account_id: request.id,
            amount: request.amount,
        }
    }

    pub fn to_deposit_command(request: &MoneyMovementRequest) -> DepositCommand {
        DepositCommand {
            account_id: request.id,
            amount: request.amount,
        }
    }

    pub fn to_transfer_command(request: &MoneyMovementRequest) -> TransferCommand {
        TransferCommand {
            source_id: request.id,
            target_id: request.target_id,
            amount: request.amount,
        }
    }

    pub fn to_create_command(request: CreateAccountRequest) -> CreateAccountCommand {
        CreateAccountCommand {
            account_id: request.id,
            name: request.name,
            opening_balance: request.balance,
        }
    }

    pub fn to_update_command(account_id: AccountId, request: UpdateAccountRequest) -> UpdateAccountCommand {
        UpdateAccountCommand {
            account_id,
            name: request.name,
        }
    }
}
