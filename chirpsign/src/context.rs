use chirpsign_core::{Context, OsEnv};
use chirpsign_file_read_tokio::TokioFileRead;
use chirpsign_http_send_reqwest::ReqwestHttpSend;

/// Create a context that reads files with tokio, sends requests with
/// reqwest and reads the OS environment.
pub fn default_context() -> Context {
    Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
