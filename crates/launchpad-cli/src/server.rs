//! HTTP surface: the submission endpoint and the dashboard echo.
//!
//! Connections are accepted on a blocking `tiny_http` loop running on the
//! blocking pool; each request is handed to its own runtime task, so a slow
//! Notion call never holds up other requests. Routing is a plain async
//! function so it can be tested without sockets.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use launchpad_core::{
    ConfigSource, DashboardQuery, DashboardView, NotionApi, NotionClient, ProcessEnv, Submitter,
};
use log::{debug, error, info, warn};
use serde_json::json;
use tiny_http::{Header, Method, Request, Response, Server};
use tokio::{
    runtime::Handle,
    signal::unix::{signal, SignalKind},
};

const JSON: &str = "application/json";
const MARKDOWN: &str = "text/markdown; charset=utf-8";

/// Response produced by [`App::route`].
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    fn json(status: u16, body: &impl serde::Serialize) -> Self {
        let body = serde_json::to_string(body).unwrap_or_else(|e| {
            error!("Failed to serialize response: {e}");
            r#"{"error":"Internal error."}"#.to_string()
        });
        Self {
            status,
            content_type: JSON,
            body,
        }
    }

    fn not_found() -> Self {
        Self::json(404, &json!({"error": "Not found.", "category": "not_found"}))
    }

    fn method_not_allowed() -> Self {
        Self::json(
            405,
            &json!({"error": "Method not allowed.", "category": "method_not_allowed"}),
        )
    }
}

/// Request router shared by every connection.
pub struct App<A, C> {
    submitter: Submitter<A, C>,
    include_details: bool,
}

impl<A, C> App<A, C>
where
    A: NotionApi,
    C: ConfigSource,
{
    /// `include_details` controls whether error bodies carry diagnostics.
    pub fn new(submitter: Submitter<A, C>, include_details: bool) -> Self {
        Self {
            submitter,
            include_details,
        }
    }

    pub async fn route(&self, method: &Method, url: &str, body: &[u8]) -> Reply {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        match (path, method) {
            ("/api/notion", Method::Post) => match self.submitter.submit(body).await {
                Ok(page) => Reply::json(200, &page),
                Err(e) => Reply::json(e.status_code(), &e.to_body(self.include_details)),
            },
            ("/dashboard", Method::Get) => Reply {
                status: 200,
                content_type: MARKDOWN,
                body: DashboardView(&DashboardQuery::parse(query)).to_string(),
            },
            ("/api/notion" | "/dashboard", _) => Reply::method_not_allowed(),
            _ => Reply::not_found(),
        }
    }
}

/// Hands every incoming request to its own task until the server is
/// unblocked.
fn accept_requests<A, C>(server: &Server, app: &Arc<App<A, C>>, handle: &Handle)
where
    A: NotionApi + 'static,
    C: ConfigSource + 'static,
{
    for request in server.incoming_requests() {
        let app = Arc::clone(app);
        handle.spawn(async move { serve_request(&app, request).await });
    }
}

async fn serve_request<A, C>(app: &App<A, C>, mut request: Request)
where
    A: NotionApi,
    C: ConfigSource,
{
    let method = request.method().clone();
    let url = request.url().to_string();
    info!("{method} {url}");

    let mut body = Vec::new();
    let read = request.as_reader().read_to_end(&mut body);
    let reply = match read {
        Ok(_) => app.route(&method, &url, &body).await,
        Err(e) => {
            warn!("Failed to read request body: {e}");
            Reply::json(
                400,
                &json!({"error": "Invalid JSON body.", "category": "malformed_request"}),
            )
        }
    };
    debug!("{method} {url} -> {}", reply.status);

    let mut response = Response::from_string(reply.body).with_status_code(reply.status);
    match Header::from_bytes("Content-Type", reply.content_type) {
        Ok(header) => response = response.with_header(header),
        Err(()) => warn!("Invalid content type header: {}", reply.content_type),
    }
    if let Err(e) = request.respond(response) {
        warn!("Failed to send response: {e}");
    }
}

/// Options for [`run_http_server`].
pub struct ServerOptions {
    pub bind: String,
    pub include_details: bool,
}

/// Serves until SIGINT or SIGTERM.
pub async fn run_http_server(options: ServerOptions) -> Result<()> {
    let client = NotionClient::new().context("Failed to initialize Notion client")?;
    let app = Arc::new(App::new(
        Submitter::new(client, ProcessEnv),
        options.include_details,
    ));

    let server = Arc::new(
        Server::http(&options.bind).map_err(|e| anyhow!("Failed to bind {}: {e}", options.bind))?,
    );
    info!("Listening on http://{}", options.bind);
    if options.include_details {
        info!("Error details are included in responses");
    }

    let handle = Handle::current();
    let accepting = Arc::clone(&server);
    let mut accept_loop =
        tokio::task::spawn_blocking(move || accept_requests(&accepting, &app, &handle));

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = &mut accept_loop => {
            match result {
                Ok(()) => info!("HTTP server stopped normally"),
                Err(e) => error!("HTTP server error: {e:?}"),
            }
            return Ok(());
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    server.unblock();
    if let Err(e) = accept_loop.await {
        error!("HTTP server error: {e:?}");
    }
    info!("HTTP server shutdown complete");
    Ok(())
}
