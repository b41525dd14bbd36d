//! End-to-end search flows driven through `handle_event`, with a recording
//! transport standing in for the host's web requests.

use std::collections::BTreeMap;

use stargazer::app::{LoadState, SEARCH_FAILED_MESSAGE};
use stargazer::service::{
    PermissionGate, RequestSeq, SearchRequest, SearchService, WebAccess, SEQ_CONTEXT_KEY,
};
use stargazer::ui::viewmodel::StatusKind;
use stargazer::{handle_event, Action, AppState, Event, Focus, ResultItem, Theme};

#[derive(Debug, Default)]
struct RecordingService {
    sent: Vec<SearchRequest>,
}

impl SearchService for RecordingService {
    fn dispatch(&mut self, request: &SearchRequest) -> stargazer::Result<()> {
        self.sent.push(request.clone());
        Ok(())
    }
}

struct Harness {
    state: AppState,
    service: RecordingService,
}

impl Harness {
    fn new() -> Self {
        Self {
            state: AppState::new(5, Theme::default()),
            service: RecordingService::default(),
        }
    }

    fn send(&mut self, event: Event) -> bool {
        let (render, actions) = handle_event(&mut self.state, &event).unwrap();
        for action in actions {
            if let Action::IssueSearch(request) = action {
                self.service.dispatch(&request).unwrap();
            }
        }
        render
    }

    fn search(&mut self, query: &str) -> RequestSeq {
        self.send(Event::FocusQuery);
        while !self.state.query().is_empty() {
            self.send(Event::Backspace);
        }
        for c in query.chars() {
            self.send(Event::Char(c));
        }
        self.send(Event::Submit);
        self.service.sent.last().unwrap().seq
    }

    fn complete(&mut self, seq: RequestSeq, outcome: Result<Vec<ResultItem>, String>) -> bool {
        self.send(Event::SearchCompleted { seq, outcome })
    }
}

fn items(prefix: &str, count: usize) -> Vec<ResultItem> {
    (0..count)
        .map(|i| ResultItem::new(i, format!("{prefix} {i}")))
        .collect()
}

fn visible_titles(state: &AppState) -> Vec<String> {
    state
        .visible_items()
        .iter()
        .map(|item| item.title().to_string())
        .collect()
}

#[test]
fn twelve_results_span_three_pages() {
    let mut h = Harness::new();
    let seq = h.search("saturn");
    assert_eq!(h.state.load_state(), &LoadState::Loading);
    assert_eq!(h.service.sent[0].query, "saturn");

    h.complete(seq, Ok(items("saturn", 12)));
    assert_eq!(h.state.page_count(), 3);
    assert_eq!(h.state.focus, Focus::Results);
    assert_eq!(visible_titles(&h.state)[0], "saturn 0");

    assert!(h.send(Event::NextPage));
    assert_eq!(visible_titles(&h.state)[0], "saturn 5");
    assert!(h.send(Event::NextPage));
    assert_eq!(visible_titles(&h.state), vec!["saturn 10", "saturn 11"]);
    assert!(!h.send(Event::NextPage));

    let vm = h.state.compute_viewmodel(40, 100);
    assert_eq!(vm.pager.label(), "Page 3 of 3");
    assert!(vm.pager.has_previous);
    assert!(!vm.pager.has_next);
    assert_eq!(vm.display_items[0].number, 1);
    assert_eq!(vm.display_items[1].title, "saturn 11");
}

#[test]
fn empty_result_has_one_page_and_no_navigation() {
    let mut h = Harness::new();
    let seq = h.search("zzzz");
    h.complete(seq, Ok(vec![]));

    assert_eq!(h.state.load_state(), &LoadState::Success);
    assert_eq!(h.state.page_count(), 1);
    assert!(h.state.visible_items().is_empty());

    let vm = h.state.compute_viewmodel(40, 100);
    assert!(!vm.pager.has_previous);
    assert!(!vm.pager.has_next);
    assert_eq!(vm.empty_state.unwrap().message, "No images found");
}

#[test]
fn failure_keeps_previous_results_and_page() {
    let mut h = Harness::new();
    let first = h.search("mars");
    h.complete(first, Ok(items("mars", 8)));
    h.send(Event::NextPage);

    let second = h.search("venus");
    assert!(h.complete(second, Err("HTTP 500".to_string())));

    assert_eq!(
        h.state.load_state(),
        &LoadState::Error(SEARCH_FAILED_MESSAGE.to_string())
    );
    assert_eq!(h.state.results().len(), 8);
    assert_eq!(h.state.pagination.page_index(), 2);

    let vm = h.state.compute_viewmodel(40, 100);
    let status = vm.status.unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.message, SEARCH_FAILED_MESSAGE);
}

#[test]
fn later_search_wins_regardless_of_completion_order() {
    let mut h = Harness::new();
    let early = h.search("moon");
    let late = h.search("sun");

    h.complete(late, Ok(items("sun", 2)));
    assert!(!h.complete(early, Ok(items("moon", 9))));

    assert_eq!(visible_titles(&h.state), vec!["sun 0", "sun 1"]);
    assert_eq!(h.state.load_state(), &LoadState::Success);
}

#[test]
fn selection_survives_paging_and_clears_on_close() {
    let mut h = Harness::new();
    let seq = h.search("nebula");
    h.complete(seq, Ok(items("nebula", 7)));

    assert!(h.send(Event::OpenVisible(2)));
    assert!(h.send(Event::NextPage));
    assert_eq!(
        h.state.selection.selected().map(ResultItem::title),
        Some("nebula 2")
    );
    let vm = h.state.compute_viewmodel(40, 100);
    assert_eq!(vm.detail.unwrap().title, "nebula 2");

    assert!(h.send(Event::CloseDetail));
    assert!(h.state.selection.selected().is_none());
    assert!(h.state.compute_viewmodel(40, 100).detail.is_none());
}

#[test]
fn new_results_replace_selection() {
    let mut h = Harness::new();
    let seq = h.search("orion");
    h.complete(seq, Ok(items("orion", 3)));
    h.send(Event::OpenUnderCursor);
    assert!(h.state.selection.is_open());

    let seq = h.search("lyra");
    assert!(h.state.selection.is_open());
    h.complete(seq, Ok(items("lyra", 3)));
    assert!(!h.state.selection.is_open());
}

#[test]
fn resubmitting_issues_a_fresh_request() {
    let mut h = Harness::new();
    let seq = h.search("comet");
    h.complete(seq, Ok(items("comet", 1)));

    h.send(Event::Submit);
    assert_eq!(h.service.sent.len(), 2);
    assert_ne!(h.service.sent[1].seq, seq);
    assert_eq!(h.service.sent[1].query, "comet");
    assert_eq!(h.state.load_state(), &LoadState::Loading);
}

#[test]
fn web_response_round_trip_through_context() {
    let mut h = Harness::new();
    h.search("apollo");
    let request = h.service.sent.last().unwrap().clone();
    assert_eq!(
        request.context().get(SEQ_CONTEXT_KEY),
        Some(&request.seq.0.to_string())
    );

    let body = br#"{"collection":{"items":[
        {"data":[{"title":"Apollo 11 Launch","date_created":"1969-07-16T00:00:00Z","nasa_id":"as11"}],
         "links":[{"href":"https://images.example/as11~thumb.jpg","rel":"preview","render":"image"}]}
    ]}}"#;
    let event = Event::from_web_response(200, body, &request.context()).unwrap();
    h.send(event);

    assert_eq!(visible_titles(&h.state), vec!["Apollo 11 Launch"]);
    let vm = h.state.compute_viewmodel(40, 100);
    assert!(vm.display_items[0].has_image);

    assert_eq!(Event::from_web_response(200, body, &BTreeMap::new()), None);
}

#[test]
fn gate_holds_search_until_permission_arrives() {
    let mut state = AppState::new(5, Theme::default());
    let mut gate = PermissionGate::new(RecordingService::default());

    state.update_query("pulsar");
    let first = state.submit_search();
    gate.dispatch(&first).unwrap();
    let second = state.submit_search();
    gate.dispatch(&second).unwrap();
    assert!(gate.inner().sent.is_empty());

    let released = gate.grant().unwrap();
    assert_eq!(released.seq, second.seq);
    gate.dispatch(&released).unwrap();
    assert_eq!(gate.access(), WebAccess::Granted);
    assert_eq!(gate.inner().sent.len(), 1);

    state.complete_search(released.seq, Ok(items("pulsar", 1)));
    assert_eq!(state.results().len(), 1);
}

#[test]
fn denied_permission_fails_the_held_search() {
    let mut state = AppState::new(5, Theme::default());
    let mut gate = PermissionGate::new(RecordingService::default());

    state.update_query("quasar");
    let request = state.submit_search();
    gate.dispatch(&request).unwrap();

    let seq = gate.deny().unwrap();
    let (render, _) = handle_event(
        &mut state,
        &Event::SearchCompleted {
            seq,
            outcome: Err("web access permission denied".to_string()),
        },
    )
    .unwrap();

    assert!(render);
    assert!(matches!(state.load_state(), LoadState::Error(_)));
    assert!(gate.dispatch(&state.submit_search()).is_err());
}
