use std::cell::RefCell;
use std::collections::VecDeque;

use todo_core::{ApiError, HttpRequest, HttpResponse, Transport};

/// Answers requests from a fixed queue; an empty queue is a transport failure.
pub struct Canned(RefCell<VecDeque<HttpResponse>>);

impl Canned {
    pub fn new(responses: &[(u16, &str)]) -> Self {
        let queue = responses
            .iter()
            .map(|(status, body)| HttpResponse::new(*status, *body))
            .collect();
        Self(RefCell::new(queue))
    }
}

impl Transport for Canned {
    fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.0
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApiError::Transport("no more responses".to_string()))
    }
}
