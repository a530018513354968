//! Draft state of the update-method form and its reducer.

use crate::types::codes::{HttpMethod, MethodStatus, ResponseStrategy, StrategyCode};
use crate::types::method::{
    has_forwarded_endpoint, MethodDraft, MethodRecord, MockResponseRef, MultipleResponseStrategy,
    NO_SELECTION,
};

/// Scalar edit of one draft attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    HttpMethod(HttpMethod),
    Status(MethodStatus),
    /// Legacy single strategy setter
    ResponseStrategy(ResponseStrategy),
    ForwardedEndpoint(Option<String>),
    AutomaticForward(bool),
    SimulateNetworkDelay(bool),
    NetworkDelay(String),
    DefaultMockResponseId(Option<String>),
}

/// User interaction applied to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Field(FieldEdit),
    ToggleStrategy { code: StrategyCode, selected: bool },
}

impl From<FieldEdit> for Edit {
    fn from(edit: FieldEdit) -> Self {
        Edit::Field(edit)
    }
}

/// Everything the form renders: the draft, the response selector entries
/// and the checked strategies in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: MethodDraft,
    pub mock_responses: Vec<MockResponseRef>,
    pub selected_strategies: Vec<StrategyCode>,
}

impl FormState {
    /// Build the form from a fetched record.
    ///
    /// A legacy single strategy other than `MULTIPLE` becomes the only
    /// selection; otherwise the multiple strategy list is used. Codes this
    /// version does not know are selected as they are, so saving writes them back.
    pub fn from_record(record: MethodRecord) -> Self {
        let legacy = record
            .response_strategy
            .as_deref()
            .filter(|s| !s.is_empty() && *s != ResponseStrategy::Multiple.as_str())
            .map(StrategyCode::from_wire);

        let mut selected = Vec::new();
        match legacy {
            Some(code) => selected.push(code),
            None => {
                let listed = record
                    .multiple_response_strategy
                    .map(|m| m.strategies)
                    .unwrap_or_default();
                for code in listed {
                    if !selected.contains(&code) {
                        selected.push(code);
                    }
                }
            }
        }

        let draft = MethodDraft {
            name: record.name,
            http_method: record.http_method,
            status: record.status,
            response_strategy: Some(ResponseStrategy::Multiple),
            multiple_response_strategy: selection_to_strategy(&selected),
            forwarded_endpoint: record.forwarded_endpoint,
            simulate_network_delay: record.simulate_network_delay.unwrap_or(false),
            network_delay: record.network_delay,
            default_mock_response_id: record.default_mock_response_id,
            automatic_forward: record.automatic_forward.unwrap_or(false),
        };

        Self {
            draft,
            mock_responses: record.mock_responses.unwrap_or_default(),
            selected_strategies: selected,
        }
    }

    /// Apply one edit, returning the next state.
    pub fn apply(mut self, edit: Edit) -> Self {
        match edit {
            Edit::Field(field) => self.apply_field(field),
            Edit::ToggleStrategy { code, selected } => self.toggle_strategy(code, selected),
        }
        self
    }

    pub fn can_enable_automatic_forward(&self) -> bool {
        self.draft.can_enable_automatic_forward()
    }

    pub fn is_strategy_selected(&self, code: &StrategyCode) -> bool {
        self.selected_strategies.contains(code)
    }

    fn apply_field(&mut self, field: FieldEdit) {
        let draft = &mut self.draft;
        match field {
            FieldEdit::Name(name) => draft.name = name,
            FieldEdit::HttpMethod(method) => draft.http_method = Some(method),
            FieldEdit::Status(status) => draft.status = Some(status),
            FieldEdit::ResponseStrategy(strategy) => draft.response_strategy = Some(strategy),
            FieldEdit::ForwardedEndpoint(endpoint) => {
                if !has_forwarded_endpoint(endpoint.as_deref()) {
                    draft.automatic_forward = false;
                }
                draft.forwarded_endpoint = endpoint;
            }
            FieldEdit::AutomaticForward(enabled) => {
                draft.automatic_forward = enabled && draft.can_enable_automatic_forward();
            }
            FieldEdit::SimulateNetworkDelay(enabled) => draft.simulate_network_delay = enabled,
            FieldEdit::NetworkDelay(delay) => draft.network_delay = delay,
            FieldEdit::DefaultMockResponseId(id) => {
                if id.as_deref().is_some_and(|id| id != NO_SELECTION) {
                    draft.automatic_forward = false;
                }
                draft.default_mock_response_id = id;
            }
        }
    }

    fn toggle_strategy(&mut self, code: StrategyCode, selected: bool) {
        if selected {
            if !self.selected_strategies.contains(&code) {
                self.selected_strategies.push(code);
            }
        } else {
            self.selected_strategies.retain(|s| *s != code);
        }
        self.draft.multiple_response_strategy = selection_to_strategy(&self.selected_strategies);
        self.draft.response_strategy = Some(ResponseStrategy::Multiple);
    }
}

fn selection_to_strategy(selected: &[StrategyCode]) -> Option<MultipleResponseStrategy> {
    if selected.is_empty() {
        None
    } else {
        Some(MultipleResponseStrategy {
            strategies: selected.to_vec(),
        })
    }
}
