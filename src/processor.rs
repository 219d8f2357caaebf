use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
    sysvar::Sysvar,
};

use crate::allocation::{RewardAllocation, RewardAllocator, RewardSlot};
use crate::error::ReportingError;
use crate::instruction::ReportingInstruction;
use crate::state::{self, ReportingConfig, REPORTING_CONFIG_SEED, REPORTING_CONFIG_SIZE};

pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = ReportingInstruction::unpack(instruction_data)?;

    match instruction {
        ReportingInstruction::InitReporting { initial } => {
            process_init_reporting(program_id, accounts, initial)
        }
        ReportingInstruction::SetReward { slot, value } => {
            process_set_reward(program_id, accounts, slot, value)
        }
        ReportingInstruction::TransferAdmin { new_admin } => {
            process_transfer_admin(program_id, accounts, &new_admin)
        }
    }
}

/// Log the reason string, then surface the numeric error.
fn fail(e: ReportingError) -> ProgramError {
    msg!("Error: {}", e.reason());
    e.into()
}

// ═══════════════════════════════════════════════════════════════
// Helper: validate admin signer + config PDA
// ═══════════════════════════════════════════════════════════════

/// Signer present, config account is the PDA and initialized.
/// The admin check itself is left to `RewardAllocator` / the caller.
fn validate_config(
    program_id: &Pubkey,
    admin: &AccountInfo,
    config_pda: &AccountInfo,
) -> ProgramResult {
    if !admin.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }
    if config_pda.owner != program_id {
        return Err(ProgramError::IncorrectProgramId);
    }
    let (expected_config, _) = state::derive_config_pda(program_id);
    if *config_pda.key != expected_config {
        return Err(fail(ReportingError::InvalidPda));
    }
    if config_pda.data_len() < REPORTING_CONFIG_SIZE {
        return Err(fail(ReportingError::NotInitialized));
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════
// 0: InitReporting
// ═══════════════════════════════════════════════════════════════

fn process_init_reporting(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    initial: RewardAllocation,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();

    let admin = next_account_info(accounts_iter)?;
    let config_pda = next_account_info(accounts_iter)?;
    let system_program = next_account_info(accounts_iter)?;

    if !admin.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let (expected_config, bump) = state::derive_config_pda(program_id);
    if *config_pda.key != expected_config {
        return Err(fail(ReportingError::InvalidPda));
    }
    if !config_pda.data_is_empty() {
        return Err(fail(ReportingError::AlreadyInitialized));
    }

    // Validate the initial rewards before paying for the account
    let mut allocator = RewardAllocator::new(*admin.key);
    for slot in RewardSlot::ALL {
        allocator
            .set_slot(admin.key, slot, initial.get(slot))
            .map_err(fail)?;
    }

    let rent = Rent::get()?;
    let config_seeds: &[&[u8]] = &[REPORTING_CONFIG_SEED, &[bump]];
    invoke_signed(
        &system_instruction::create_account(
            admin.key,
            config_pda.key,
            rent.minimum_balance(REPORTING_CONFIG_SIZE),
            REPORTING_CONFIG_SIZE as u64,
            program_id,
        ),
        &[admin.clone(), config_pda.clone(), system_program.clone()],
        &[config_seeds],
    )?;

    let mut config_data = config_pda.try_borrow_mut_data()?;
    let config: &mut ReportingConfig =
        bytemuck::from_bytes_mut(&mut config_data[..REPORTING_CONFIG_SIZE]);

    config.is_initialized = 1;
    config.bump = bump;
    config.admin = admin.key.to_bytes();
    config.store_allocation(&allocator.allocation());

    msg!(
        "Reporting initialized (admin {}): reporter {} lossless {} stakers {} committee {}",
        admin.key,
        config.reporter_reward,
        config.lossless_reward,
        config.stakers_reward,
        config.committee_reward,
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════
// 1..=4: SetReporterReward / SetLosslessReward / SetStakersReward / SetCommitteeReward
// ═══════════════════════════════════════════════════════════════

fn process_set_reward(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    slot: RewardSlot,
    value: u64,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();

    let admin = next_account_info(accounts_iter)?;
    let config_pda = next_account_info(accounts_iter)?;

    validate_config(program_id, admin, config_pda)?;

    let mut config_data = config_pda.try_borrow_mut_data()?;
    let config: &mut ReportingConfig =
        bytemuck::from_bytes_mut(&mut config_data[..REPORTING_CONFIG_SIZE]);

    if config.is_initialized != 1 {
        return Err(fail(ReportingError::NotInitialized));
    }

    let mut allocator = RewardAllocator::with_allocation(config.admin_pubkey(), config.allocation());
    allocator.set_slot(admin.key, slot, value).map_err(fail)?;
    config.store_allocation(&allocator.allocation());

    msg!("{}: {}", slot.change_event(), value);
    Ok(())
}

// ═══════════════════════════════════════════════════════════════
// 5: TransferAdmin
// ═══════════════════════════════════════════════════════════════

fn process_transfer_admin(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    new_admin: &Pubkey,
) -> ProgramResult {
    let accounts_iter = &mut accounts.iter();

    let admin = next_account_info(accounts_iter)?;
    let config_pda = next_account_info(accounts_iter)?;

    validate_config(program_id, admin, config_pda)?;

    let mut config_data = config_pda.try_borrow_mut_data()?;
    let config: &mut ReportingConfig =
        bytemuck::from_bytes_mut(&mut config_data[..REPORTING_CONFIG_SIZE]);

    if config.is_initialized != 1 {
        return Err(fail(ReportingError::NotInitialized));
    }
    if config.admin != admin.key.to_bytes() {
        return Err(fail(ReportingError::Unauthorized));
    }
    if *new_admin == Pubkey::default() {
        return Err(fail(ReportingError::InvalidAdmin));
    }

    config.admin = new_admin.to_bytes();

    msg!("AdminChange: {} -> {}", admin.key, new_admin);
    Ok(())
}
