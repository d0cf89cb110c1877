use anyhow::Result;

/// OS launch-on-login integration.
pub trait AutoStartProvider: Send + Sync {
    fn is_enabled(&self) -> bool;
    fn enable(&self) -> Result<()>;
    fn disable(&self) -> Result<()>;
}

/// Applies the requested toggle and returns the state the caller should now
/// display: the requested one on success, the previous one on failure.
pub fn apply_toggle(provider: &dyn AutoStartProvider, enable: bool) -> bool {
    let result = if enable {
        provider.enable()
    } else {
        provider.disable()
    };

    match result {
        Ok(()) => enable,
        Err(e) => {
            log::error!("Failed to toggle autostart: {:#}", e);
            !enable
        }
    }
}
