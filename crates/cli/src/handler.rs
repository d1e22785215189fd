use eyre::EyreHandler;
use itertools::Itertools;
use std::{error::Error, fmt};

/// Error reporting for the `natdoc` binary via `eyre`.
///
/// Errors are printed as their deduplicated cause chain, e.g. a failed extraction reads
/// ``failed to generate devdoc for `Token`: documented parameter "z" ...`` rather than repeating
/// the wrapped message once per layer.
pub struct Handler {
    debug_handler: Option<Box<dyn EyreHandler>>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    pub fn new() -> Self {
        Self { debug_handler: None }
    }

    /// Replaces the plain reporting with `debug_handler`, if any.
    pub fn debug_handler(mut self, debug_handler: Option<Box<dyn EyreHandler>>) -> Self {
        self.debug_handler = debug_handler;
        self
    }
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Display;
        dedup_chain(error).into_iter().format("; ").fmt(f)
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(debug_handler) = &self.debug_handler {
            return debug_handler.debug(error, f);
        }
        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }

        let errors = dedup_chain(error);
        let Some((error, causes)) = errors.split_first() else { return Ok(()) };
        write!(f, "{error}")?;

        match causes {
            [] => {}
            [cause] => write!(f, "\n\nCaused by:\n- {cause}")?,
            causes => {
                write!(f, "\n\nCaused by:")?;
                for (n, cause) in causes.iter().enumerate() {
                    write!(f, "\n- #{n}: {cause}")?;
                }
            }
        }
        Ok(())
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(debug_handler) = &mut self.debug_handler {
            debug_handler.track_caller(location);
        }
    }
}

/// Installs the natdoc [`eyre`] and [`panic`](mod@std::panic) hooks.
///
/// `NATDOC_DEBUG` in the environment switches error reports to the verbose `color-eyre` output.
/// Panics always use it.
pub fn install() {
    let panic_section = "This is a bug in natdoc. Please report it along with the contract JSON.";
    let (panic_hook, debug_hook) =
        color_eyre::config::HookBuilder::default().panic_section(panic_section).into_hooks();
    panic_hook.install();

    let debug_hook = debug_hook.into_eyre_hook();
    let debug = std::env::var_os("NATDOC_DEBUG").is_some();
    if let Err(err) = eyre::set_hook(Box::new(move |e| {
        Box::new(Handler::new().debug_handler(debug.then(|| debug_hook(e))))
    })) {
        debug!("failed to install eyre error hook: {err}");
    }
}

/// Returns the messages of `error` and its sources, dropping a message already contained in the
/// one before it.
pub fn dedup_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut causes: Vec<String> =
        eyre::Chain::new(error).map(|cause| cause.to_string().trim().to_string()).collect();
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}
