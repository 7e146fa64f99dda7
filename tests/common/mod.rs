// tests/common/mod.rs
//
// Scripted stand-in for the remote endpoint. Routes on the `method` form
// field and records every request in order.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::{json, Value};
use shot_harvest::config::{HarvestOptions, RateLimit};
use shot_harvest::{Transport, TransportError};

pub type Form = HashMap<String, String>;
type Handler = Box<dyn Fn(&Form) -> Result<String, TransportError>>;

pub const LIST: &str = "listSessionsWithScoreForPlayerAndFilter";
pub const LITE: &str = "GetSessionLite";
pub const DATA: &str = "GetSessionResultData";

pub struct FakeRemote {
    handler: Handler,
    calls: RefCell<Vec<Form>>,
}

impl FakeRemote {
    pub fn new(handler: impl Fn(&Form) -> Result<String, TransportError> + 'static) -> Self {
        Self { handler: Box::new(handler), calls: RefCell::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<Form> {
        self.calls.borrow().clone()
    }

    pub fn calls_for(&self, method: &str) -> Vec<Form> {
        self.calls
            .borrow()
            .iter()
            .filter(|f| f.get("method").map(String::as_str) == Some(method))
            .cloned()
            .collect()
    }
}

impl Transport for FakeRemote {
    fn post_form(&self, params: &[(&str, &str)]) -> Result<String, TransportError> {
        let form: Form = params.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        self.calls.borrow_mut().push(form.clone());
        (self.handler)(&form)
    }
}

pub fn opts() -> HarvestOptions {
    let mut o = HarvestOptions::new("573120");
    o.rate = RateLimit::none();
    o
}

pub fn method(form: &Form) -> &str {
    form.get("method").map(String::as_str).unwrap_or("")
}

pub fn arg<'a>(form: &'a Form, key: &str) -> &'a str {
    form.get(key).map(String::as_str).unwrap_or("")
}

pub fn status(code: u16) -> TransportError {
    TransportError::Status { code, url: "https://remote.test/index.php".into() }
}

pub fn network() -> TransportError {
    TransportError::Network { url: "https://remote.test/index.php".into(), message: "connection reset".into() }
}

/// Listing page with `(id, name)` sessions.
pub fn session_page(sessions: &[(&str, &str)]) -> String {
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<Sessions>");
    for (id, name) in sessions {
        doc.push_str(&format!(
            "<Session><sessionID>{id}</sessionID><sessionDisplayName>{name}</sessionDisplayName>\
             <sessionCreateDate>2024-05-01T10:00:00</sessionCreateDate><appVersion>FS Golf 4.2</appVersion>\
             <sessionLocation/><sessionTypeID>1</sessionTypeID></Session>"
        ));
    }
    doc.push_str("</Sessions>");
    doc
}

pub fn wrap(v: &Value) -> String {
    format!("<Response>{v}</Response>")
}

/// Enveloped `GetSessionLite` answer listing `ids`.
pub fn lite(ids: &[u64]) -> String {
    let range: Vec<Value> = ids.iter().map(|id| json!({ "ResultID": id, "Club": "7i" })).collect();
    wrap(&json!({ "SessionID": "x", "ResultsRange": range }))
}

/// A realistic shot payload.
pub fn shot(id: u64) -> Value {
    json!({
        "ResultID": id,
        "SwingIndex": 3,
        "ShotDateTime": "2024-05-01T10:03:12",
        "ClubID": 17,
        "ClubTypeID": 7,
        "IsInvalid": false,
        "IsDeleted": false,
        "ResultType": 1,
        "ResultParameters": {
            "CARRYDIST_PARAMETER_STRING": "151.3",
            "TOTALDIST_PARAMETER_STRING": "160.0",
            "LAUNCHSPEED_PARAMETER_STRING": 52.1,
            "SPIN_IS_ESTIMATE": true,
            "CARRYDIST": 138.35
        },
        "WeatherData": {
            "WEATHER_TEMPERATURE": 18.5,
            "LATITUDE": "59.91"
        },
        "GolfSwingParameters": {
            "SHOTCLASSIFICATION_PARAMETER_STRING": "Draw",
            "RADARCAMERATYPE": "Mevo+"
        }
    })
}

pub fn shots(ids: &[u64]) -> String {
    wrap(&Value::Array(ids.iter().map(|id| shot(*id)).collect()))
}
