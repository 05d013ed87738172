use cors_gate::Exchange;

/// In-memory exchange recording everything written to the response.
#[derive(Debug, Default, Clone)]
pub struct MockExchange {
    pub method: String,
    pub request_headers: Vec<(String, String)>,
    pub response_headers: Vec<(String, String)>,
    pub status: Option<u16>,
    pub body: Vec<u8>,
}

impl MockExchange {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            ..Self::default()
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn response_header(&self, name: &str) -> Option<&str> {
        self.response_headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl Exchange for MockExchange {
    fn method(&self) -> &str {
        &self.method
    }

    fn request_header(&self, name: &str) -> Option<&str> {
        self.request_headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.response_headers
            .retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.response_headers
            .push((name.to_string(), value.to_string()));
    }

    fn append_header(&mut self, name: &str, value: &str) {
        self.response_headers
            .push((name.to_string(), value.to_string()));
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn write_body(&mut self, body: &[u8]) {
        self.body.extend_from_slice(body);
    }
}

/// Inner handler used throughout the integration tests.
pub fn hello_world(exchange: &mut MockExchange) {
    exchange.set_status(200);
    exchange.write_body(b"Hello World");
}
