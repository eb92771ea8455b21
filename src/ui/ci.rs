/// GitHub Actions `::error::` workflow command for a fatal message.
pub fn github_actions_error(message: &str, title: &str) -> String {
    format!(
        "::error title={}::{}",
        escape_workflow_command(title),
        escape_workflow_command(message)
    )
}

fn escape_workflow_command(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_escapes_newlines_and_percent() {
        let rendered = github_actions_error("50% done\nthen failed", "pwa-firebase-msg");
        assert_eq!(
            rendered,
            "::error title=pwa-firebase-msg::50%25 done%0Athen failed"
        );
    }
}
