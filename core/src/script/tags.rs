/// Closed enumeration of simulation stage names.
///
/// Wire form is the SCREAMING_SNAKE tag used in use case `simulationFlow`
/// arrays. Unknown tags are not an error at this level; callers fall back to
/// the unrecognized-event line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTag {
    InitializeRansomwarePayload,
    DetectEncryptionPattern,
    BruteForceAttempt,
    MultipleFailedLogins,
    PowershellExecution,
    DetectEncodedCommand,
    SmbConnectionAttempt,
    DetectAdminShareAccess,
    IncomingEmailScan,
    MaliciousAttachmentDetected,
    TokenManipulationAttempt,
    DetectPrivilegeChange,
    UnusualDnsQueries,
    DetectDnsTunneling,
    UnusualDataAccess,
    DetectBulkDownload,
    AlertTriggered,
    IsolateEndpoint,
    TerminateProcess,
    AccountLockout,
    ProcessTerminated,
    NetworkSegmentation,
    EmailQuarantine,
    UserAccountLockdown,
    DnsBlockRule,
    UserAccountReview,
    SimulationComplete,
}

impl EventTag {
    pub fn parse(tag: &str) -> Option<Self> {
        Some(match tag {
            "INITIALIZE_RANSOMWARE_PAYLOAD" => Self::InitializeRansomwarePayload,
            "DETECT_ENCRYPTION_PATTERN" => Self::DetectEncryptionPattern,
            "BRUTE_FORCE_ATTEMPT" => Self::BruteForceAttempt,
            "MULTIPLE_FAILED_LOGINS" => Self::MultipleFailedLogins,
            "POWERSHELL_EXECUTION" => Self::PowershellExecution,
            "DETECT_ENCODED_COMMAND" => Self::DetectEncodedCommand,
            "SMB_CONNECTION_ATTEMPT" => Self::SmbConnectionAttempt,
            "DETECT_ADMIN_SHARE_ACCESS" => Self::DetectAdminShareAccess,
            "INCOMING_EMAIL_SCAN" => Self::IncomingEmailScan,
            "MALICIOUS_ATTACHMENT_DETECTED" => Self::MaliciousAttachmentDetected,
            "TOKEN_MANIPULATION_ATTEMPT" => Self::TokenManipulationAttempt,
            "DETECT_PRIVILEGE_CHANGE" => Self::DetectPrivilegeChange,
            "UNUSUAL_DNS_QUERIES" => Self::UnusualDnsQueries,
            "DETECT_DNS_TUNNELING" => Self::DetectDnsTunneling,
            "UNUSUAL_DATA_ACCESS" => Self::UnusualDataAccess,
            "DETECT_BULK_DOWNLOAD" => Self::DetectBulkDownload,
            "ALERT_TRIGGERED" => Self::AlertTriggered,
            "ISOLATE_ENDPOINT" => Self::IsolateEndpoint,
            "TERMINATE_PROCESS" => Self::TerminateProcess,
            "ACCOUNT_LOCKOUT" => Self::AccountLockout,
            "PROCESS_TERMINATED" => Self::ProcessTerminated,
            "NETWORK_SEGMENTATION" => Self::NetworkSegmentation,
            "EMAIL_QUARANTINE" => Self::EmailQuarantine,
            "USER_ACCOUNT_LOCKDOWN" => Self::UserAccountLockdown,
            "DNS_BLOCK_RULE" => Self::DnsBlockRule,
            "USER_ACCOUNT_REVIEW" => Self::UserAccountReview,
            "SIMULATION_COMPLETE" => Self::SimulationComplete,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitializeRansomwarePayload => "INITIALIZE_RANSOMWARE_PAYLOAD",
            Self::DetectEncryptionPattern => "DETECT_ENCRYPTION_PATTERN",
            Self::BruteForceAttempt => "BRUTE_FORCE_ATTEMPT",
            Self::MultipleFailedLogins => "MULTIPLE_FAILED_LOGINS",
            Self::PowershellExecution => "POWERSHELL_EXECUTION",
            Self::DetectEncodedCommand => "DETECT_ENCODED_COMMAND",
            Self::SmbConnectionAttempt => "SMB_CONNECTION_ATTEMPT",
            Self::DetectAdminShareAccess => "DETECT_ADMIN_SHARE_ACCESS",
            Self::IncomingEmailScan => "INCOMING_EMAIL_SCAN",
            Self::MaliciousAttachmentDetected => "MALICIOUS_ATTACHMENT_DETECTED",
            Self::TokenManipulationAttempt => "TOKEN_MANIPULATION_ATTEMPT",
            Self::DetectPrivilegeChange => "DETECT_PRIVILEGE_CHANGE",
            Self::UnusualDnsQueries => "UNUSUAL_DNS_QUERIES",
            Self::DetectDnsTunneling => "DETECT_DNS_TUNNELING",
            Self::UnusualDataAccess => "UNUSUAL_DATA_ACCESS",
            Self::DetectBulkDownload => "DETECT_BULK_DOWNLOAD",
            Self::AlertTriggered => "ALERT_TRIGGERED",
            Self::IsolateEndpoint => "ISOLATE_ENDPOINT",
            Self::TerminateProcess => "TERMINATE_PROCESS",
            Self::AccountLockout => "ACCOUNT_LOCKOUT",
            Self::ProcessTerminated => "PROCESS_TERMINATED",
            Self::NetworkSegmentation => "NETWORK_SEGMENTATION",
            Self::EmailQuarantine => "EMAIL_QUARANTINE",
            Self::UserAccountLockdown => "USER_ACCOUNT_LOCKDOWN",
            Self::DnsBlockRule => "DNS_BLOCK_RULE",
            Self::UserAccountReview => "USER_ACCOUNT_REVIEW",
            Self::SimulationComplete => "SIMULATION_COMPLETE",
        }
    }
}
