//! System prompt for the grievance assistant.
//!
//! Fixes the router's behavioural contract: collect missing fields before
//! registering, ask for an id before a status lookup, ask for a mobile
//! number before listing.

/// Instruction prompt sent as the system message on every model round.
pub const SYSTEM_PROMPT: &str = "\
You are a helpful customer service assistant for handling complaints.

When a user wants to register a complaint:
1. Ask for their name, mobile number, and complaint details
2. Once you have all information, use the register_complaint tool
3. Format: \"Name, Mobile, Complaint Details\"

When checking status:
- Ask for complaint ID and use check_complaint_status tool

When viewing all complaints:
- Ask for mobile number and use get_complaints_by_mobile tool

Be polite and helpful.";

#[cfg(test)]
mod tests {
    use super::*;
    use grievance_types::tool::ToolName;

    #[test]
    fn test_prompt_names_every_tool() {
        for tool in ToolName::ALL {
            assert!(
                SYSTEM_PROMPT.contains(tool.as_str()),
                "prompt does not mention {tool}"
            );
        }
    }

    #[test]
    fn test_prompt_states_register_format() {
        assert!(SYSTEM_PROMPT.contains("\"Name, Mobile, Complaint Details\""));
    }
}
