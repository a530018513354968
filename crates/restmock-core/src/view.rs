//! Plain-text rendering of the update-method form.

use crate::form::state::FormState;
use crate::format::multiple_response_strategy_label;
use crate::types::codes::{HttpMethod, MethodStatus, StrategyCode};
use crate::types::method::NO_SELECTION;
use std::fmt::Write;

const LABEL_WIDTH: usize = 34;

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{:<width$}{}", label, value, width = LABEL_WIDTH);
}

/// A current value outside `all` (an unknown code) is appended so it stays visible.
fn choices<T: PartialEq>(
    all: &[T],
    current: Option<&T>,
    label: impl Fn(&T) -> String,
) -> String {
    let mut shown: Vec<String> = all
        .iter()
        .map(|item| {
            if Some(item) == current {
                format!("({})", label(item))
            } else {
                label(item)
            }
        })
        .collect();
    if let Some(current) = current.filter(|c| !all.contains(c)) {
        shown.push(format!("({})", label(current)));
    }
    shown.join(" ")
}

/// Render the form as it would appear in the update dialog.
///
/// Choice rows list every option with the current one in parentheses.
pub fn render(state: &FormState) -> String {
    let draft = &state.draft;
    let mut out = String::from("Update method\n\n");

    row(&mut out, "Name", &draft.name);
    row(
        &mut out,
        "Type",
        &choices(HttpMethod::ALL, draft.http_method.as_ref(), |m| m.as_str().to_string()),
    );
    row(
        &mut out,
        "Status",
        &choices(MethodStatus::ALL, draft.status.as_ref(), |s| s.label().to_string()),
    );

    let unknown = state.selected_strategies.iter().filter(|c| !c.is_known());
    for (i, code) in StrategyCode::ALL.iter().chain(unknown).enumerate() {
        let label = if i == 0 { "Response strategies" } else { "" };
        let value = format!("{} {}", checkbox(state.is_strategy_selected(code)), code.label());
        row(&mut out, label, &value);
    }
    if !state.selected_strategies.is_empty() {
        let codes: Vec<&str> = state.selected_strategies.iter().map(|c| c.as_str()).collect();
        row(
            &mut out,
            "",
            &format!("Selected: {}", multiple_response_strategy_label(&codes)),
        );
    }

    row(
        &mut out,
        "Forwarded endpoint",
        draft.forwarded_endpoint.as_deref().unwrap_or(""),
    );
    let can_forward = state.can_enable_automatic_forward();
    let forward = checkbox(can_forward && draft.automatic_forward);
    let forward = if can_forward {
        forward.to_string()
    } else {
        format!("{} (disabled)", forward)
    };
    row(&mut out, "Automatic forward with no match", &forward);
    row(
        &mut out,
        "Simulate network delay",
        checkbox(draft.simulate_network_delay),
    );
    row(&mut out, "Network delay", &draft.network_delay);

    let selected_id = draft
        .default_mock_response_id
        .as_deref()
        .filter(|id| *id != NO_SELECTION);
    let mut options = vec![if selected_id.is_none() {
        format!("({})", NO_SELECTION)
    } else {
        NO_SELECTION.to_string()
    }];
    options.extend(state.mock_responses.iter().map(|response| {
        if Some(response.id.as_str()) == selected_id {
            format!("({})", response.name)
        } else {
            response.name.clone()
        }
    }));
    for (i, option) in options.iter().enumerate() {
        let label = if i == 0 { "Default response" } else { "" };
        row(&mut out, label, option);
    }

    out
}
