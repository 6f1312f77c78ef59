use tracing::warn;

pub const BUFFER_SIZE_ENV: &str = "INVENTARIO_BUFFER_SIZE";
const DEFAULT_BUFFER_SIZE: usize = 32;

/// Settings for the inventory service actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Capacity of the service mailbox.
    pub buffer_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ServiceConfig {
    /// Reads `INVENTARIO_BUFFER_SIZE`, falling back to the default when it is
    /// unset, unparsable or zero.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(BUFFER_SIZE_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };

        match raw.trim().parse::<usize>() {
            Ok(buffer_size) if buffer_size > 0 => Self { buffer_size },
            _ => {
                warn!(value = raw, "Ignoring invalid {BUFFER_SIZE_ENV}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_parsing() {
        assert_eq!(ServiceConfig::from_value(None).buffer_size, 32);
        assert_eq!(ServiceConfig::from_value(Some("8")).buffer_size, 8);
        assert_eq!(ServiceConfig::from_value(Some(" 64 ")).buffer_size, 64);
        assert_eq!(ServiceConfig::from_value(Some("0")).buffer_size, 32);
        assert_eq!(ServiceConfig::from_value(Some("lots")).buffer_size, 32);
    }
}
