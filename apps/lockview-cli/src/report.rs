use std::error::Error;

/// Joins an error and all of its sources, one per line.
pub fn format_error_chain(error: &(dyn Error + 'static)) -> String {
    let mut chain = vec![error.to_string()];
    let mut source = error.source();

    while let Some(err) = source {
        chain.push(format!("  caused by: {}", err));
        source = err.source();
    }

    chain.join("\n")
}

pub fn log_error(context: &str, error: &(dyn Error + 'static)) {
    let error_chain = format_error_chain(error);
    tracing::error!(context = context, error = %error_chain, "error occurred");
}
