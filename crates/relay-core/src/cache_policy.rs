use serde_json::json;

/// Static-asset cache policy for the companion front-end.
///
/// The front-end registers a service worker generated from this policy:
/// install precaches the allow-listed assets under the version name,
/// activate drops caches with other version names, and fetch goes
/// network-first with cache fallback. Requests whose URL contains a
/// bypass marker (API and cloud-provider endpoints) never touch the cache.
#[derive(Debug, Clone)]
pub struct AssetCachePolicy {
    version: String,
    assets: Vec<String>,
    bypass_markers: Vec<String>,
}

impl AssetCachePolicy {
    pub fn new(version: String, assets: Vec<String>, bypass_markers: Vec<String>) -> Self {
        Self {
            version,
            assets,
            bypass_markers,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn precached_assets(&self) -> &[String] {
        &self.assets
    }

    /// True when the URL must skip the cache entirely
    pub fn should_bypass(&self, url: &str) -> bool {
        self.bypass_markers.iter().any(|marker| url.contains(marker))
    }

    /// True when the path is in the install-time allow-list
    pub fn is_precached(&self, path: &str) -> bool {
        self.assets.iter().any(|asset| asset == path)
    }

    /// Emit the service-worker script served at /sw.js.
    /// JSON-encoding the embedded values keeps the script valid whatever
    /// the configured strings contain.
    pub fn render_service_worker(&self) -> String {
        let version = json!(self.version);
        let assets = json!(self.assets);
        let markers = json!(self.bypass_markers);

        format!(
            r#"/* generated service worker - do not edit by hand */

const CACHE_NAME = {version};
const STATIC_ASSETS = {assets};
const BYPASS_MARKERS = {markers};

self.addEventListener("install", event => {{
  event.waitUntil(
    caches.open(CACHE_NAME).then(cache => cache.addAll(STATIC_ASSETS))
  );
  self.skipWaiting();
}});

self.addEventListener("activate", event => {{
  event.waitUntil(
    caches.keys().then(keys =>
      Promise.all(
        keys.filter(k => k !== CACHE_NAME).map(k => caches.delete(k))
      )
    )
  );
  self.clients.claim();
}});

self.addEventListener("fetch", event => {{
  const req = event.request;

  if (BYPASS_MARKERS.some(marker => req.url.includes(marker))) {{
    return;
  }}

  // Network first, cache fallback
  event.respondWith(
    fetch(req)
      .then(res => {{
        const copy = res.clone();
        caches.open(CACHE_NAME).then(cache => cache.put(req, copy));
        return res;
      }})
      .catch(() => caches.match(req))
  );
}});
"#
        )
    }
}
