use crate::facts::{ComponentKind, PathPermission};
use crate::findings::{Finding, FindingKind, Findings};
use crate::reporter::Reporter;
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn kind_label(&self, kind: FindingKind) -> colored::ColoredString {
        let label = format!("[{}]", kind);
        match kind {
            FindingKind::Undefined => label.red().bold(),
            FindingKind::Unprivileged => label.yellow().bold(),
        }
    }

    fn permission_text(permission: &str) -> colored::ColoredString {
        if permission.is_empty() {
            "(none)".dimmed()
        } else {
            permission.cyan()
        }
    }

    fn format_path_permission(&self, path: &PathPermission) -> String {
        let matcher = [
            ("path", &path.path),
            ("pathPrefix", &path.path_prefix),
            ("pathPattern", &path.path_pattern),
        ]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(" ");

        format!(
            "    path-permission {}: permission {}, read {}, write {}\n",
            if matcher.is_empty() { "(any)".to_string() } else { matcher },
            Self::permission_text(&path.permission),
            Self::permission_text(&path.read_permission),
            Self::permission_text(&path.write_permission),
        )
    }

    fn format_finding(&self, kind: FindingKind, component: ComponentKind, finding: &Finding) -> String {
        let mut output = format!(
            "{} {:8} {}\n",
            self.kind_label(kind),
            component.as_str(),
            finding.name.bold()
        );
        output.push_str(&format!(
            "  permission: {}\n",
            Self::permission_text(&finding.permission)
        ));

        if let Some(ref detail) = finding.provider {
            output.push_str(&format!(
                "  readPermission: {}\n  writePermission: {}\n",
                Self::permission_text(&detail.read_permission),
                Self::permission_text(&detail.write_permission)
            ));
            if self.verbose {
                for path in &detail.path_permissions {
                    output.push_str(&self.format_path_permission(path));
                }
            } else if !detail.path_permissions.is_empty() {
                output.push_str(&format!(
                    "  {} path-permission override(s)\n",
                    detail.path_permissions.len()
                ));
            }
        }

        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, findings: &Findings) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!(
                "exposure-audit v{} - Exported Component Permission Audit",
                env!("CARGO_PKG_VERSION")
            )
            .bold()
        ));

        if findings.is_empty() {
            output.push_str(&"No exposed components found.\n".green().to_string());
        } else {
            for kind in [FindingKind::Undefined, FindingKind::Unprivileged] {
                for (component, finding) in findings.bucket(kind).iter() {
                    output.push_str(&self.format_finding(kind, component, finding));
                    output.push('\n');
                }
            }
        }

        let summary = findings.summary();
        output.push_str(&format!("{}\n", "━".repeat(50)));
        output.push_str(&format!(
            "Summary: {} undefined, {} unprivileged ({} activity, {} service, {} provider, {} receiver)\n",
            summary.undefined.to_string().red().bold(),
            summary.unprivileged.to_string().yellow().bold(),
            summary.activity,
            summary.service,
            summary.provider,
            summary.receiver
        ));

        if summary.passed {
            output.push_str(&format!("Result: {}\n", "PASS".green().bold()));
        } else {
            output.push_str(&format!("Result: {}\n", "FAIL".red().bold()));
        }

        output
    }
}
