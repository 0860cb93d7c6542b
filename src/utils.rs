use axum::http::StatusCode;
use axum_flash::IncomingFlashes;

pub fn e500<T>(e: T) -> StatusCode
where
    T: std::fmt::Debug + std::fmt::Display + 'static,
{
    tracing::error!("Internal Server error: {e:?}");
    StatusCode::INTERNAL_SERVER_ERROR
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Joins pending flash messages, one per line.
pub fn read_flash_messages(flash_messages: &IncomingFlashes) -> String {
    flash_messages
        .iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join("\n")
}
