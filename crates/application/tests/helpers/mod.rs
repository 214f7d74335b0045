#![allow(dead_code)]

mod mock_requester;

pub use mock_requester::{answer_json, MockHttpRequester, MockReply};
