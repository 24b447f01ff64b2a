//! JSON-RPC Server
//!
//! Implements the JSON-RPC 2.0 server over HTTP.

use crate::error::RpcServerError;
use crate::handler::RpcHandler;
use crate::types::{
    CreateTodoRequest, DeleteTodoRequest, ReadTodoRequest, UpdateTodoRequest, METHOD_CREATE,
    METHOD_DELETE, METHOD_READ, METHOD_UPDATE,
};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use todo_core::application::TodoService;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9530;
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    /// `0` picks a free port
    pub port: u16,
    /// Deadline applied to every store call made on behalf of a request
    pub request_timeout: Duration,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, service: TodoService) -> Self {
        let handler = Arc::new(RpcHandler::new(service, config.request_timeout));
        Self { config, handler }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful with `port: 0`) and the handle
    /// used to stop the server.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), RpcServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|source| RpcServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = server
            .local_addr()
            .map_err(|source| RpcServerError::Bind { addr, source })?;

        let module = self.module()?;

        info!(addr = %local_addr, "JSON-RPC server started successfully");

        let handle = server.start(module);
        Ok((local_addr, handle))
    }

    fn module(&self) -> Result<RpcModule<()>, RpcServerError> {
        let mut module = RpcModule::new(());

        // Register methods
        let handler = self.handler.clone();
        module
            .register_async_method(METHOD_CREATE, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: CreateTodoRequest = params.one()?;
                    handler.create(req).await
                }
            })
            .map_err(|e| RpcServerError::Register(e.to_string()))?;

        let handler = self.handler.clone();
        module
            .register_async_method(METHOD_READ, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: ReadTodoRequest = params.one()?;
                    handler.read(req).await
                }
            })
            .map_err(|e| RpcServerError::Register(e.to_string()))?;

        let handler = self.handler.clone();
        module
            .register_async_method(METHOD_UPDATE, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: UpdateTodoRequest = params.one()?;
                    handler.update(req).await
                }
            })
            .map_err(|e| RpcServerError::Register(e.to_string()))?;

        let handler = self.handler.clone();
        module
            .register_async_method(METHOD_DELETE, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: DeleteTodoRequest = params.one()?;
                    handler.delete(req).await
                }
            })
            .map_err(|e| RpcServerError::Register(e.to_string()))?;

        Ok(module)
    }
}
