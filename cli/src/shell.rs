use std::io::{self, BufRead, Write};

use todo_core::{SyncLayer, Transport};

use crate::command::{parse_line, Action, ShellCommand};
use crate::render::render;

const PROMPT: &str = "todo> ";

/// Load, apply one action, and render the result. The action runs even if
/// the load failed.
pub fn run_once<T: Transport>(sync: &mut SyncLayer<T>, action: &Action) -> String {
    // SyncLayer logs every failure; here they only mean "keep the last view".
    let _ = sync.load();
    let _ = action.apply(sync);
    render(sync.view())
}

/// Interactive session: one view kept across commands, re-rendered after each.
pub fn run<T, R, W>(sync: &mut SyncLayer<T>, input: R, mut output: W) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    // Failures are logged by SyncLayer; the view stays as last known.
    let _ = sync.load();
    write!(output, "{}", render(sync.view()))?;

    write!(output, "{PROMPT}")?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            continue;
        }
        match parse_line(&line) {
            Ok(ShellCommand::Quit) => return Ok(()),
            Ok(ShellCommand::Reload) => {
                sync.invalidate();
                let _ = sync.ensure_loaded();
                write!(output, "{}", render(sync.view()))?;
            }
            Ok(ShellCommand::Action(action)) => {
                let _ = action.apply(sync);
                write!(output, "{}", render(sync.view()))?;
            }
            Err(err) => write!(output, "{}", err.render())?,
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }
    writeln!(output)
}

#[cfg(test)]
mod tests {
    use todo_core::TodoClient;

    use super::*;
    use crate::render::EMPTY_MESSAGE;
    use crate::testing::Canned;

    fn session(transport: Canned, input: &str) -> String {
        let mut sync = SyncLayer::new(TodoClient::new("http://test"), transport);
        let mut out = Vec::new();
        run(&mut sync, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_then_quit() {
        let transport = Canned::new(&[
            (200, "[]"),
            (201, r#"{"id":1,"text":"Buy milk","completed":false}"#),
        ]);
        let out = session(transport, "add Buy milk\nquit\nadd never sent\n");
        assert!(out.starts_with(EMPTY_MESSAGE));
        assert!(out.contains("[ ] 1  Buy milk\n"));
        assert!(!out.contains("never sent"));
    }

    #[test]
    fn failed_action_keeps_last_view() {
        let transport = Canned::new(&[
            (200, r#"[{"id":1,"text":"A","completed":false}]"#),
            (404, r#"{"error":"Todo is not found"}"#),
        ]);
        let out = session(transport, "delete 1\n");
        assert_eq!(out.matches("[ ] 1  A\n").count(), 2);
    }

    #[test]
    fn one_shot_add_survives_failed_load() {
        let transport = Canned::new(&[
            (500, "list unavailable"),
            (201, r#"{"id":4,"text":"Buy milk","completed":false}"#),
        ]);
        let mut sync = SyncLayer::new(TodoClient::new("http://test"), transport);
        let action = Action::Add {
            text: vec!["Buy".into(), "milk".into()],
        };

        let out = run_once(&mut sync, &action);
        assert_eq!(out, "[ ] 4  Buy milk\n");
    }

    #[test]
    fn one_shot_failed_action_renders_loaded_view() {
        let transport = Canned::new(&[
            (200, r#"[{"id":1,"text":"A","completed":false}]"#),
            (404, r#"{"error":"Todo is not found"}"#),
        ]);
        let mut sync = SyncLayer::new(TodoClient::new("http://test"), transport);

        let out = run_once(&mut sync, &Action::Delete { id: 1 });
        assert_eq!(out, "[ ] 1  A\n");
    }

    #[test]
    fn unknown_command_prints_usage_error() {
        let out = session(Canned::new(&[(200, "[]")]), "frobnicate\n");
        assert!(out.contains("error"));
    }
}
