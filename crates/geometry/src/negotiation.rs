//! Protocol version negotiation.
//!
//! The resolver asks a [`CapabilityProbe`] whether the server answers on a
//! given [`ProtocolVersion`], newest first, and adopts the first version that
//! does. The probe is the only network I/O involved; it belongs to the
//! infrastructure layer and is injected here as a port.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::NegotiationError;
use crate::version::{ProtocolVersion, VersionRequest};

/// Probe timeout used when the caller does not choose one.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

// ---------------------------------------------------------------------------
// Port
// ---------------------------------------------------------------------------

/// Tests whether a live connection speaks one specific protocol version.
///
/// Implementations issue the version's administrative health call with the
/// given timeout and answer `false` on any transport error, status error,
/// undecodable response or timeout. "Not supported" is an expected outcome of
/// probing and is never reported as an error.
#[async_trait]
pub trait CapabilityProbe<C: ?Sized + Sync>: Send + Sync {
    async fn probe(&self, connection: &C, version: ProtocolVersion, timeout: Duration) -> bool;
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// How a session chooses its protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationConfig {
    /// `auto`, a version name, or an ordinal.
    pub request: VersionRequest,
    /// Per-probe timeout in seconds.
    pub probe_timeout_secs: f64,
}

impl NegotiationConfig {
    /// Returns the probe timeout as a [`Duration`].
    ///
    /// # Errors
    ///
    /// [`NegotiationError::InvalidProbeTimeout`] if the configured value is not
    /// a positive, finite number of seconds.
    pub fn probe_timeout(&self) -> Result<Duration, NegotiationError> {
        let secs = self.probe_timeout_secs;
        if secs.is_finite() && secs > 0.0 {
            Duration::try_from_secs_f64(secs)
                .map_err(|_| NegotiationError::InvalidProbeTimeout { seconds: secs })
        } else {
            Err(NegotiationError::InvalidProbeTimeout { seconds: secs })
        }
    }
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            request: VersionRequest::Auto,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT.as_secs_f64(),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Decides which protocol version a session uses.
///
/// - `Exact(v)`: probes `v` only. Failure is
///   [`NegotiationError::UnsupportedRequestedVersion`]; there is no fallback.
/// - `Auto`: probes from [`ProtocolVersion::latest`] downwards and returns the
///   first healthy version, or [`NegotiationError::NoSupportedVersion`] once
///   [`ProtocolVersion::previous`] runs out.
///
/// Each probe gets the full `timeout`, so the worst case is
/// `timeout × ProtocolVersion::ALL.len()`.
///
/// # Errors
///
/// Also [`NegotiationError::InvalidProbeTimeout`] for a zero timeout; no probe
/// is issued in that case.
#[tracing::instrument(level = "debug", skip(probe, connection))]
pub async fn resolve<C, P>(
    probe: &P,
    connection: &C,
    request: VersionRequest,
    timeout: Duration,
) -> Result<ProtocolVersion, NegotiationError>
where
    C: ?Sized + Sync,
    P: CapabilityProbe<C> + ?Sized,
{
    if timeout.is_zero() {
        return Err(NegotiationError::InvalidProbeTimeout { seconds: 0.0 });
    }

    if let VersionRequest::Exact(version) = request {
        debug!(%version, "probing explicitly requested protocol version");
        return if probe.probe(connection, version, timeout).await {
            info!(%version, "server supports requested protocol version");
            Ok(version)
        } else {
            warn!(%version, "server rejected requested protocol version");
            Err(NegotiationError::UnsupportedRequestedVersion { version })
        };
    }

    let mut attempted = Vec::with_capacity(ProtocolVersion::ALL.len());
    let mut candidate = ProtocolVersion::latest();
    loop {
        debug!(version = %candidate, "probing protocol version");
        attempted.push(candidate);
        if probe.probe(connection, candidate, timeout).await {
            info!(version = %candidate, "negotiated protocol version");
            return Ok(candidate);
        }
        candidate = match candidate.previous() {
            Ok(previous) => previous,
            Err(_) => {
                warn!(?attempted, "server answered on no known protocol version");
                return Err(NegotiationError::NoSupportedVersion { attempted });
            }
        };
    }
}

/// [`resolve`] driven by a [`NegotiationConfig`].
///
/// # Errors
///
/// See [`resolve`] and [`NegotiationConfig::probe_timeout`].
pub async fn resolve_with_config<C, P>(
    probe: &P,
    connection: &C,
    config: &NegotiationConfig,
) -> Result<ProtocolVersion, NegotiationError>
where
    C: ?Sized + Sync,
    P: CapabilityProbe<C> + ?Sized,
{
    let timeout = config.probe_timeout()?;
    resolve(probe, connection, config.request, timeout).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// A fake server: healthy on a fixed set of versions, recording probes.
    struct FakeServer {
        healthy: Vec<ProtocolVersion>,
    }

    #[derive(Default)]
    struct RecordingProbe {
        calls: Mutex<Vec<(ProtocolVersion, Duration)>>,
    }

    #[async_trait]
    impl CapabilityProbe<FakeServer> for RecordingProbe {
        async fn probe(
            &self,
            connection: &FakeServer,
            version: ProtocolVersion,
            timeout: Duration,
        ) -> bool {
            self.calls.lock().push((version, timeout));
            connection.healthy.contains(&version)
        }
    }

    fn server(healthy: &[ProtocolVersion]) -> FakeServer {
        FakeServer {
            healthy: healthy.to_vec(),
        }
    }

    const T: Duration = Duration::from_millis(250);

    #[tokio::test]
    async fn explicit_request_never_falls_back() {
        let probe = RecordingProbe::default();
        let result = resolve(
            &probe,
            &server(&[ProtocolVersion::V0]),
            VersionRequest::Exact(ProtocolVersion::V1),
            T,
        )
        .await;
        assert_eq!(
            result,
            Err(NegotiationError::UnsupportedRequestedVersion {
                version: ProtocolVersion::V1
            })
        );
        assert_eq!(*probe.calls.lock(), vec![(ProtocolVersion::V1, T)]);
    }

    #[tokio::test]
    async fn explicit_request_succeeds_when_supported() {
        let probe = RecordingProbe::default();
        let result = resolve(
            &probe,
            &server(&[ProtocolVersion::V0, ProtocolVersion::V1]),
            VersionRequest::Exact(ProtocolVersion::V0),
            T,
        )
        .await;
        assert_eq!(result, Ok(ProtocolVersion::V0));
    }

    #[tokio::test]
    async fn auto_picks_newest_supported() {
        let probe = RecordingProbe::default();
        let result = resolve(
            &probe,
            &server(&[ProtocolVersion::V0, ProtocolVersion::V1]),
            VersionRequest::Auto,
            T,
        )
        .await;
        assert_eq!(result, Ok(ProtocolVersion::V1));
        assert_eq!(probe.calls.lock().len(), 1);
    }

    #[tokio::test]
    async fn auto_probes_in_descending_order() {
        let probe = RecordingProbe::default();
        let result = resolve(
            &probe,
            &server(&[ProtocolVersion::V0]),
            VersionRequest::Auto,
            T,
        )
        .await;
        assert_eq!(result, Ok(ProtocolVersion::V0));
        let versions: Vec<_> = probe.calls.lock().iter().map(|(v, _)| *v).collect();
        assert_eq!(versions, vec![ProtocolVersion::V1, ProtocolVersion::V0]);
    }

    #[tokio::test]
    async fn auto_with_no_healthy_version_fails() {
        let probe = RecordingProbe::default();
        let result = resolve(&probe, &server(&[]), VersionRequest::Auto, T).await;
        assert_eq!(
            result,
            Err(NegotiationError::NoSupportedVersion {
                attempted: vec![ProtocolVersion::V1, ProtocolVersion::V0]
            })
        );
        // Every probe gets the caller's timeout.
        assert!(probe.calls.lock().iter().all(|(_, t)| *t == T));
    }

    #[tokio::test]
    async fn zero_timeout_is_rejected_before_probing() {
        let probe = RecordingProbe::default();
        let result = resolve(
            &probe,
            &server(&[ProtocolVersion::V1]),
            VersionRequest::Auto,
            Duration::ZERO,
        )
        .await;
        assert!(matches!(result, Err(NegotiationError::InvalidProbeTimeout { .. })));
        assert!(probe.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn config_drives_resolution() {
        let probe = RecordingProbe::default();
        let config = NegotiationConfig {
            request: "v0".parse().unwrap(),
            probe_timeout_secs: 1.5,
        };
        let result =
            resolve_with_config(&probe, &server(&[ProtocolVersion::V0]), &config).await;
        assert_eq!(result, Ok(ProtocolVersion::V0));
        assert_eq!(
            *probe.calls.lock(),
            vec![(ProtocolVersion::V0, Duration::from_millis(1500))]
        );
    }

    #[test]
    fn config_rejects_bad_timeouts() {
        for secs in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = NegotiationConfig {
                probe_timeout_secs: secs,
                ..NegotiationConfig::default()
            };
            assert!(config.probe_timeout().is_err(), "{secs} accepted");
        }
        assert_eq!(
            NegotiationConfig::default().probe_timeout(),
            Ok(Duration::from_secs(5))
        );
    }
}
