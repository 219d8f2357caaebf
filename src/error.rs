use solana_program::program_error::ProgramError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ReportingError {
    /// Reporting config already initialized
    AlreadyInitialized = 0,
    /// Reporting config not initialized
    NotInitialized = 1,
    /// Caller is not the admin
    Unauthorized = 2,
    /// Sum of the four reward percentages would exceed 100
    TotalExceed100 = 3,
    /// Config account is not the expected PDA
    InvalidPda = 4,
    /// New admin is the zero key
    InvalidAdmin = 5,
}

impl ReportingError {
    /// Fixed reason string surfaced in program logs.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::AlreadyInitialized => "LSS: Already initialized",
            Self::NotInitialized => "LSS: Not initialized",
            Self::Unauthorized => "LSS: Must be admin",
            Self::TotalExceed100 => "LSS: Total exceed 100",
            Self::InvalidPda => "LSS: Invalid config address",
            Self::InvalidAdmin => "LSS: Cannot set zero address",
        }
    }
}

impl From<ReportingError> for ProgramError {
    fn from(e: ReportingError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
