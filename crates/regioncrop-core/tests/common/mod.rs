use std::cell::RefCell;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread::JoinHandle;

use regioncrop_core::error::{RegionCropError, Result};
use regioncrop_core::geometry::Dimensions;
use regioncrop_core::protocol::{CropRequest, CropResponse};
use regioncrop_core::service::{parse_base_url, uploads_path, CropService};
use url::Url;

/// In-memory stand-in for the cropping server.
///
/// Records every crop request and answers with the configured response.
pub struct FakeService {
    pub base: Url,
    pub dimensions: Option<Dimensions>,
    pub crop_response: CropResponse,
    pub crop_requests: RefCell<Vec<CropRequest>>,
    pub dimension_lookups: RefCell<Vec<String>>,
}

impl FakeService {
    pub fn new(dimensions: Option<Dimensions>, crop_response: CropResponse) -> Self {
        Self {
            base: parse_base_url("http://server.test").expect("valid base url"),
            dimensions,
            crop_response,
            crop_requests: RefCell::new(Vec::new()),
            dimension_lookups: RefCell::new(Vec::new()),
        }
    }

    pub fn cropping_to(path: &str) -> Self {
        Self::new(
            Some(Dimensions::new(2736, 3584)),
            CropResponse {
                cropped_image_path: Some(path.into()),
                error: None,
            },
        )
    }
}

impl CropService for FakeService {
    fn upload(&self, files: &[PathBuf]) -> Result<String> {
        Ok(format!("{} files", files.len()))
    }

    fn start_over(&self) -> Result<()> {
        Ok(())
    }

    fn dimensions(&self, filename: &str) -> Result<Dimensions> {
        self.dimension_lookups.borrow_mut().push(filename.into());
        self.dimensions.ok_or_else(|| RegionCropError::DimensionsUnavailable {
            filename: filename.into(),
            reason: "not found".into(),
        })
    }

    fn crop(&self, request: &CropRequest) -> Result<CropResponse> {
        self.crop_requests.borrow_mut().push(request.clone());
        Ok(self.crop_response.clone())
    }

    fn fetch_image(&self, _locator: &Url) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn image_locator(&self, filename: &str) -> Result<Url> {
        Ok(self.base.join(&uploads_path(filename))?)
    }

    fn resolve_path(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }
}

/// Minimal HTTP/1.1 server on a local port.
///
/// Answers one connection per canned `(status, json body)` in order, then
/// stops. Every raw request (head and body) is recorded.
pub struct FakeHttpServer {
    pub base_url: String,
    requests: mpsc::Receiver<String>,
    handle: JoinHandle<()>,
}

impl FakeHttpServer {
    pub fn serve(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
        let addr = listener.local_addr().expect("local addr");
        let (tx, requests) = mpsc::channel();

        let handle = std::thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().expect("accept");
                let request = read_request(&mut stream);
                let _ = tx.send(request);
                let reason = if status == 200 { "OK" } else { "Internal Server Error" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).expect("write response");
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    /// Wait for every canned response to be served and return the requests.
    pub fn finish(self) -> Vec<String> {
        self.handle.join().expect("server thread");
        self.requests.try_iter().collect()
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if request_complete(&buf) {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn request_complete(buf: &[u8]) -> bool {
    let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
    let body = &buf[head_end + 4..];

    if head.contains("transfer-encoding: chunked") {
        return body.ends_with(b"0\r\n\r\n");
    }
    let length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    body.len() >= length
}
