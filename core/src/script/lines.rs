//! One human-readable transcript line per event tag.

use serde_json::Value;

use super::tags::EventTag;
use crate::catalog::UseCase;
use crate::template::ParamMap;

/// Renders the transcript line for `tag`. Unknown tags fall back to a
/// sentinel line instead of failing, since the flow arrays are data.
pub fn line_for(tag: &str, params: &ParamMap) -> String {
    let Some(tag) = EventTag::parse(tag) else {
        return format!("[?] Unrecognized event: {tag}");
    };
    render(tag, params)
}

/// The full transcript for a use case, in authorial flow order.
pub fn transcript_for(use_case: &UseCase) -> Vec<String> {
    use_case
        .simulation_flow
        .iter()
        .map(|tag| line_for(tag, &use_case.soar_data_params))
        .collect()
}

fn render(tag: EventTag, params: &ParamMap) -> String {
    let p = |key: &str, fallback: &str| param_or(params, key, fallback);
    match tag {
        EventTag::InitializeRansomwarePayload => format!(
            "[*] Initializing ransomware payload for {}...",
            p("endpointName", "target endpoint")
        ),
        EventTag::DetectEncryptionPattern => format!(
            "[!] Detecting suspicious file encryption patterns on {}...",
            p("ipAddress", "endpoint")
        ),
        EventTag::BruteForceAttempt => format!(
            "[*] Initiating brute-force attempt against {} for user '{}' from {}...",
            p("service", "service"),
            p("username", "unknown"),
            p("ipAddress", "unknown IP")
        ),
        EventTag::MultipleFailedLogins => format!(
            "[!] Multiple failed login attempts detected for user '{}' from {}.",
            p("username", "unknown"),
            p("ipAddress", "unknown IP")
        ),
        EventTag::PowershellExecution => format!(
            "[*] Executing suspicious PowerShell script on {} by user '{}'...",
            p("ipAddress", "endpoint"),
            p("user", "unknown")
        ),
        EventTag::DetectEncodedCommand => format!(
            "[!] Encoded command detected within '{}' execution.",
            p("processName", "process")
        ),
        EventTag::SmbConnectionAttempt => format!(
            "[*] Attempting SMB connection from {} to {}...",
            p("sourceIp", "source"),
            p("destIp", "destination")
        ),
        EventTag::DetectAdminShareAccess => format!(
            "[!] Unauthorized administrative share access to '{}' detected.",
            p("share", "unknown share")
        ),
        EventTag::IncomingEmailScan => format!(
            "[*] Scanning incoming email from '{}'...",
            p("senderEmail", "unknown sender")
        ),
        EventTag::MaliciousAttachmentDetected => format!(
            "[!] Malicious attachment '{}' detected.",
            p("attachmentName", "unknown attachment")
        ),
        EventTag::TokenManipulationAttempt => format!(
            "[*] Attempting token manipulation for user '{}' on system '{}'...",
            p("username", "unknown"),
            p("system", "unknown system")
        ),
        EventTag::DetectPrivilegeChange => format!(
            "[!] Unauthorized privilege level change detected for user '{}' from process '{}'",
            p("username", "unknown"),
            p("process", "unknown")
        ),
        EventTag::UnusualDnsQueries => format!(
            "[*] Monitoring unusual DNS query patterns from {}...",
            p("sourceIp", "source IP")
        ),
        EventTag::DetectDnsTunneling => format!(
            "[!] Suspected DNS tunneling activity detected to domain '{}'.",
            p("domain", "unknown domain")
        ),
        EventTag::UnusualDataAccess => format!(
            "[*] Monitoring data access patterns for user '{}' on '{}'...",
            p("username", "unknown"),
            p("dataShare", "unknown share")
        ),
        EventTag::DetectBulkDownload => format!(
            "[!] Bulk download of {} detected by user '{}'.",
            p("volume", "unknown volume"),
            p("username", "unknown")
        ),
        EventTag::AlertTriggered => "[✓] Alert triggered by Trinetra.".to_string(),
        EventTag::IsolateEndpoint => {
            format!("[✓] Endpoint {} isolated.", p("ipAddress", "target"))
        }
        EventTag::TerminateProcess => format!(
            "[✓] Process '{}' terminated.",
            p("malwareName", "malicious process")
        ),
        EventTag::AccountLockout => {
            format!("[✓] Account '{}' locked out.", p("username", "unknown"))
        }
        EventTag::ProcessTerminated => format!(
            "[✓] Malicious process '{}' terminated.",
            p("processName", "process")
        ),
        EventTag::NetworkSegmentation => format!(
            "[✓] Network segment containing {} isolated.",
            p("destIp", "target")
        ),
        EventTag::EmailQuarantine => format!(
            "[✓] Malicious email from '{}' quarantined.",
            p("senderEmail", "unknown sender")
        ),
        EventTag::UserAccountLockdown => format!(
            "[✓] User account '{}' locked down.",
            p("username", "unknown")
        ),
        EventTag::DnsBlockRule => format!(
            "[✓] DNS block rule applied for domain '{}'",
            p("domain", "unknown")
        ),
        EventTag::UserAccountReview => format!(
            "[✓] User account '{}' flagged for review.",
            p("username", "unknown")
        ),
        EventTag::SimulationComplete => {
            "--- Simulation Complete --- Redirecting to SOAR Dashboard ---".to_string()
        }
    }
}

/// Field lookup with a fixed fallback word, never an empty string.
fn param_or(params: &ParamMap, key: &str, fallback: &str) -> String {
    match params.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: serde_json::Value) -> ParamMap {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn progress_line_uses_params() {
        let p = params(json!({"service": "VPN", "username": "admin", "ipAddress": "103.20.10.5"}));
        assert_eq!(
            line_for("BRUTE_FORCE_ATTEMPT", &p),
            "[*] Initiating brute-force attempt against VPN for user 'admin' from 103.20.10.5..."
        );
    }

    #[test]
    fn missing_fields_fall_back_to_fixed_words() {
        let p = ParamMap::new();
        assert_eq!(
            line_for("MULTIPLE_FAILED_LOGINS", &p),
            "[!] Multiple failed login attempts detected for user 'unknown' from unknown IP."
        );
        assert_eq!(line_for("ISOLATE_ENDPOINT", &p), "[✓] Endpoint target isolated.");
    }

    #[test]
    fn simulation_complete_is_the_fixed_divider() {
        assert_eq!(
            line_for("SIMULATION_COMPLETE", &ParamMap::new()),
            "--- Simulation Complete --- Redirecting to SOAR Dashboard ---"
        );
    }

    #[test]
    fn unknown_tag_produces_sentinel_line() {
        assert_eq!(
            line_for("NOT_A_TAG", &ParamMap::new()),
            "[?] Unrecognized event: NOT_A_TAG"
        );
    }

    #[test]
    fn every_tag_renders_with_empty_params() {
        // No tag may panic or produce an empty line when fields are absent.
        let all = [
            "INITIALIZE_RANSOMWARE_PAYLOAD",
            "DETECT_ENCRYPTION_PATTERN",
            "BRUTE_FORCE_ATTEMPT",
            "MULTIPLE_FAILED_LOGINS",
            "POWERSHELL_EXECUTION",
            "DETECT_ENCODED_COMMAND",
            "SMB_CONNECTION_ATTEMPT",
            "DETECT_ADMIN_SHARE_ACCESS",
            "INCOMING_EMAIL_SCAN",
            "MALICIOUS_ATTACHMENT_DETECTED",
            "TOKEN_MANIPULATION_ATTEMPT",
            "DETECT_PRIVILEGE_CHANGE",
            "UNUSUAL_DNS_QUERIES",
            "DETECT_DNS_TUNNELING",
            "UNUSUAL_DATA_ACCESS",
            "DETECT_BULK_DOWNLOAD",
            "ALERT_TRIGGERED",
            "ISOLATE_ENDPOINT",
            "TERMINATE_PROCESS",
            "ACCOUNT_LOCKOUT",
            "PROCESS_TERMINATED",
            "NETWORK_SEGMENTATION",
            "EMAIL_QUARANTINE",
            "USER_ACCOUNT_LOCKDOWN",
            "DNS_BLOCK_RULE",
            "USER_ACCOUNT_REVIEW",
            "SIMULATION_COMPLETE",
        ];
        for tag in all {
            let line = line_for(tag, &ParamMap::new());
            assert!(!line.is_empty());
            assert!(!line.starts_with("[?]"), "tag {tag} not recognized");
        }
    }
}
