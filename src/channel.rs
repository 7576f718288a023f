//! Channel-level option propagation.
//!
//! A resolved options mapping still speaks the URI's vocabulary
//! (`connecttimeoutms=5000`). The queue channel wants typed knobs. This
//! module maps the recognized keys onto a [`ChannelOptions`] struct and
//! keeps everything it does not recognize in `extra`, untouched, for the
//! driver layer to interpret.

use std::time::Duration;

use crate::options::{OptionValue, OptionsMap};

/// Typed view of the options a queue channel consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelOptions {
    /// Enable TLS for broker connections.
    pub ssl: Option<bool>,
    /// Force fsync on writes.
    pub fsync: Option<bool>,
    /// Wait for journal commit on writes.
    pub journal: Option<bool>,
    /// Replica set name.
    pub replica_set: Option<String>,
    /// Connection timeout.
    pub connect_timeout: Option<Duration>,
    /// Socket timeout.
    pub socket_timeout: Option<Duration>,
    /// Server selection timeout.
    pub server_selection_timeout: Option<Duration>,
    /// Maximum connection pool size.
    pub max_pool_size: Option<u32>,
    /// Minimum connection pool size.
    pub min_pool_size: Option<u32>,
    /// Maximum idle time for pooled connections.
    pub max_idle_time: Option<Duration>,
    /// Write concern (a node count or a tag like `majority`).
    pub write_concern: Option<String>,
    /// Write concern timeout.
    pub write_timeout: Option<Duration>,
    /// Wire compressors, in preference order.
    pub compressors: Option<Vec<String>>,
    /// Bypass replica set discovery and connect to the host directly.
    pub direct_connection: Option<bool>,
    /// Options not recognized at the channel level, passed through as-is.
    pub extra: OptionsMap,
}

impl ChannelOptions {
    /// Build channel options from a resolved options mapping.
    pub fn from_options(options: &OptionsMap) -> Self {
        let mut opts = Self::default();

        for (key, value) in options {
            match key.as_str() {
                "ssl" | "tls" => opts.ssl = value.as_bool(),
                "fsync" => opts.fsync = value.as_bool(),
                "journal" | "j" => opts.journal = value.as_bool(),
                "replicaset" => opts.replica_set = value.as_str().map(String::from),
                "connecttimeoutms" => opts.connect_timeout = millis(value),
                "sockettimeoutms" => opts.socket_timeout = millis(value),
                "serverselectiontimeoutms" => opts.server_selection_timeout = millis(value),
                "maxpoolsize" => opts.max_pool_size = pool_size(value),
                "minpoolsize" => opts.min_pool_size = pool_size(value),
                "maxidletimems" => opts.max_idle_time = millis(value),
                "w" => opts.write_concern = write_concern(value),
                "wtimeoutms" => opts.write_timeout = millis(value),
                "compressors" => opts.compressors = value.as_list().map(<[String]>::to_vec),
                "directconnection" => opts.direct_connection = value.as_bool(),
                _ => {
                    opts.extra.insert(key.clone(), value.clone());
                }
            }
        }

        opts
    }
}

fn millis(value: &OptionValue) -> Option<Duration> {
    value
        .as_int()
        .and_then(|n| u64::try_from(n).ok())
        .map(Duration::from_millis)
}

fn pool_size(value: &OptionValue) -> Option<u32> {
    value.as_int().and_then(|n| u32::try_from(n).ok())
}

fn write_concern(value: &OptionValue) -> Option<String> {
    match value {
        OptionValue::Int(n) => Some(n.to_string()),
        OptionValue::String(s) => Some(s.clone()),
        _ => None,
    }
}
