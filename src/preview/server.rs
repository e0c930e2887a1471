use std::net::{Ipv4Addr, SocketAddr};

use tiny_http::{Header, Method, Request, Response, Server};
use tracing::{debug, error, info};

use super::PreviewPage;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Route {
    Page,
    WrongPath,
    WrongMethod,
}

fn route(method: &Method, url: &str) -> Route {
    let path = url.split('?').next().unwrap_or(url);
    if *method != Method::Get {
        Route::WrongMethod
    } else if path != "/" {
        Route::WrongPath
    } else {
        Route::Page
    }
}

fn html_content_type() -> Result<Header> {
    Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..])
        .map_err(|()| Error::Header)
}

/// Serves one already-loaded preview page on the loopback interface.
pub struct PreviewServer {
    server: Server,
    html: String,
    content_type: Header,
}

impl PreviewServer {
    /// Bind `127.0.0.1:port`; port 0 picks a free one.
    pub fn bind(page: &PreviewPage, port: u16) -> Result<Self> {
        let server = Server::http((Ipv4Addr::LOCALHOST, port)).map_err(Error::Bind)?;
        Ok(Self {
            server,
            html: page.render(),
            content_type: html_content_type()?,
        })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Answer a single request, blocking until one arrives.
    pub fn serve_one(&self) -> Result<()> {
        let request = self.server.recv()?;
        self.respond(request)
    }

    /// Answer requests until the listener shuts down.
    pub fn run(&self) {
        if let Some(addr) = self.local_addr() {
            info!(%addr, "serving preview page");
        }
        for request in self.server.incoming_requests() {
            if let Err(e) = self.respond(request) {
                error!("Failed to answer preview request: {}", e);
            }
        }
    }

    fn respond(&self, request: Request) -> Result<()> {
        let route = route(request.method(), request.url());
        debug!(method = %request.method(), url = request.url(), ?route, "preview request");
        let response = match route {
            Route::Page => {
                Response::from_string(self.html.as_str()).with_header(self.content_type.clone())
            }
            Route::WrongPath => Response::from_string("").with_status_code(404),
            Route::WrongMethod => Response::from_string("").with_status_code(405),
        };
        request.respond(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route() {
        assert_eq!(route(&Method::Get, "/"), Route::Page);
        assert_eq!(route(&Method::Get, "/?seed=3"), Route::Page);
        assert_eq!(route(&Method::Get, "/style.css"), Route::WrongPath);
        assert_eq!(route(&Method::Post, "/"), Route::WrongMethod);
        assert_eq!(route(&Method::Head, "/nope"), Route::WrongMethod);
    }

    #[test]
    fn test_bind_any_port() {
        let page = PreviewPage::from_labels("t", "card", ["x"]);
        let server = PreviewServer::bind(&page, 0).unwrap();
        let addr = server.local_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }
}
