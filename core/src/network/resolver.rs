use std::net::IpAddr;

use sweepr_common::error::ResolveError;
use tokio::net::lookup_host;

/// Looks up every address of `host`.
///
/// Duplicates (one per socket type on most resolvers) are removed while the
/// resolver's order is kept. An empty vector means the name exists but has no
/// address; a failed lookup is an error.
pub async fn resolve(host: &str) -> Result<Vec<IpAddr>, ResolveError> {
    let addrs = lookup_host((host, 0))
        .await
        .map_err(|source| ResolveError::Lookup {
            host: host.to_string(),
            source,
        })?;

    let mut resolved: Vec<IpAddr> = Vec::new();
    for addr in addrs {
        let ip = addr.ip();
        if !resolved.contains(&ip) {
            resolved.push(ip);
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn literal_address_resolves_to_itself() {
        let resolved = resolve("127.0.0.1").await.unwrap();
        assert_eq!(resolved, vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]);
    }

    #[tokio::test]
    async fn localhost_resolves_to_loopback_without_duplicates() {
        let resolved = resolve("localhost").await.unwrap();

        assert!(resolved.iter().all(|ip| ip.is_loopback()));
        let mut deduped = resolved.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), resolved.len());
    }

    #[tokio::test]
    async fn unknown_host_is_an_error() {
        let result = resolve("no-such-host.invalid").await;
        assert!(matches!(result, Err(ResolveError::Lookup { .. })));
    }
}
