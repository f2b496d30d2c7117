//! Mock email-support tools. They only format a markdown report of the
//! simulated action; nothing is sent.

use crate::agent::AgentType;
use crate::tool;
use crate::tools::Namespace;

/// Appended to every tool result.
pub const FORMATTING_INSTRUCTIONS: &str = "Instructions: returning the output of this function call verbatim to the user in markdown. Then write AGENT SUMMARY: and then include a summary of what you did.";

pub const AGENT: AgentType = AgentType::EmailSupport;

pub const NAMESPACE: &str = "EmailSupportTools";

/// EBS contact notified about new hires.
pub const EBS_EMAIL: &str = "amcguire@myebs.com";

#[tool(
    description = "Send a welcome email to a new employee as part of onboarding. This is at the start of the onboarding process, to the employee's personal email address."
)]
pub async fn send_welcome_email(human_email: String, employee_name: String, personal_email_address: String) -> String {
    format!(
        "##### Welcome Email Sent\n\
         **Employee Name:** {employee_name}\n\
         **Email Address:** {personal_email_address}\n\n\
         **Initiator Email Address:** {human_email}\n\n\
         A welcome email has been successfully sent to {employee_name} at {personal_email_address}.\n\
         {FORMATTING_INSTRUCTIONS}"
    )
}

#[tool(description = "Set up an Office 365 account for an employee.")]
pub async fn set_up_office_365_account(full_name: String, email_address: String) -> String {
    format!(
        "##### Office 365 Account Setup\n\
         **Employee Name:** {full_name}\n\
         **Email Address:** {email_address}\n\n\
         An Office 365 account has been successfully set up for {full_name} at {email_address}.\n\
         {FORMATTING_INSTRUCTIONS}"
    )
}

#[tool(
    description = "Email EBS about a new employee hire, personal_email_address is the employee's personal email address."
)]
pub async fn send_email_to_ebs(full_name: String, personal_email_address: String) -> String {
    format!(
        "##### Laptop Configuration\n\
         **Full Name:** {full_name}\n\
         **Sent To EBS:** {EBS_EMAIL}\n\n\
         **New Employee Personal Address:** {personal_email_address}\n\n\
         The notification email to EBS for {personal_email_address} has been successfully sent.\n\
         {FORMATTING_INSTRUCTIONS}"
    )
}

/// The email-support tools, in declaration order.
pub fn namespace() -> Namespace {
    Namespace::new(NAMESPACE, AGENT)
        .with_tool(SendWelcomeEmailTool)
        .with_tool(SetUpOffice365AccountTool)
        .with_tool(SendEmailToEbsTool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogBuilder;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn welcome_email_reports_the_employee() {
        let out = send_welcome_email(
            "a@x.com".into(),
            "Jane Doe".into(),
            "jane@personal.com".into(),
        )
        .await;
        assert!(out.starts_with("##### Welcome Email Sent\n"));
        assert!(out.contains("**Employee Name:** Jane Doe"));
        assert!(out.contains("**Initiator Email Address:** a@x.com\n\n"));
        assert!(out.contains("sent to Jane Doe at jane@personal.com.\n"));
        assert!(out.ends_with(FORMATTING_INSTRUCTIONS));
    }

    #[tokio::test]
    async fn ebs_notification_names_the_contact() {
        let out = send_email_to_ebs("Jane Doe".into(), "jane@personal.com".into()).await;
        assert!(out.contains(&format!("**Sent To EBS:** {EBS_EMAIL}")));
        assert!(out.contains("for jane@personal.com has been successfully sent."));
        assert!(out.ends_with(FORMATTING_INSTRUCTIONS));
    }

    #[test]
    fn catalog_describes_all_three_tools() {
        let json = CatalogBuilder::new().build_catalog(&namespace()).unwrap();
        let records: Vec<Value> = serde_json::from_str(&json).unwrap();
        let functions: Vec<&str> = records.iter().map(|r| r["function"].as_str().unwrap()).collect();
        assert_eq!(functions, vec!["send_welcome_email", "set_up_office_365_account", "send_email_to_ebs"]);
        assert!(records.iter().all(|r| r["agent"] == "Email_Support_Agent"));
        assert_eq!(records[1]["description"], "Set up an Office 365 account for an employee.");
        assert_eq!(
            records[1]["arguments"],
            "{'full_name': {'description': 'full_name', 'title': 'Full Name', 'type': 'string'}, \
             'email_address': {'description': 'email_address', 'title': 'Email Address', 'type': 'string'}}"
        );
    }

    #[tokio::test]
    async fn registry_dispatches_office_365_setup() {
        let registry = CatalogBuilder::new().collect_registry(&namespace());
        assert_eq!(registry.len(), 3);
        let out = registry
            .dispatch(
                "set_up_office_365_account",
                json!({ "full_name": "Jane Doe", "email_address": "jane@corp.com" }),
            )
            .await
            .unwrap();
        assert!(out.contains("set up for Jane Doe at jane@corp.com."));
    }
}
