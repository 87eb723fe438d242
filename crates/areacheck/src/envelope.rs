//! Response envelope: status line, content type, content length and body.
//!
//! Rendered as
//! `<status line>\r\nContent-Type: <type>\r\nContent-Length: <n>\r\n\r\n<body>`
//! where `n` is the UTF-8 byte length of the body.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
        }
    }

    pub fn status_line(self) -> &'static str {
        match self {
            Status::Ok => "HTTP/1.1 200 OK",
            Status::BadRequest => "HTTP/1.1 400 Bad Request",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Html,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Json => "application/json; charset=UTF-8",
            ContentType::Html => "text/html; charset=UTF-8",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    pub status: Status,
    pub content_type: ContentType,
    pub body: String,
}

impl Envelope {
    pub fn json(status: Status, body: String) -> Self {
        Self {
            status,
            content_type: ContentType::Json,
            body,
        }
    }

    pub fn html(body: String) -> Self {
        Self {
            status: Status::Ok,
            content_type: ContentType::Html,
            body,
        }
    }

    #[inline]
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n{}",
            self.status.status_line(),
            self.content_type.as_str(),
            self.content_length(),
            self.body
        )
    }
}
