//! The snapshot orchestrator.
//!
//! One call to [`Orchestrator::run`] is one run: check the archive
//! precondition, request the prerequisites, route events into the ledger,
//! gate and catalog as they arrive, close the session once the gate
//! fires, then download every asset and write `shop-info.json`
//! concurrently. The first task failure cancels the rest and becomes the
//! run's reported cause.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use shopsnap_catalog::{
    AssetRules, Catalog, OfferLedger, ReadinessGate, SHOP_INFO_FILE, ShopInfo, assets,
};
use shopsnap_fetch::Fetcher;
use shopsnap_protocol::messages::{Request, SessionEvent};
use shopsnap_protocol::session::Session;

use crate::error::SnapshotError;

/// State gathered from the event stream while awaiting the prerequisites.
#[derive(Default)]
struct Pending {
    ledger: OfferLedger,
    gate: ReadinessGate,
    base_timestamp: Option<i64>,
    languages: Vec<String>,
    catalog: Option<Catalog>,
}

/// Drives one snapshot run against a live session.
pub struct Orchestrator {
    archive_dir: PathBuf,
    rules: AssetRules,
}

impl Orchestrator {
    pub fn new(archive_dir: impl Into<PathBuf>, rules: AssetRules) -> Self {
        Self {
            archive_dir: archive_dir.into(),
            rules,
        }
    }

    /// Fails if the archive directory already exists.
    ///
    /// Call this before opening a session so the precondition is checked
    /// before any network activity; [`run`](Self::run) repeats the check.
    pub async fn ensure_archive_absent(&self) -> Result<(), SnapshotError> {
        if tokio::fs::try_exists(&self.archive_dir).await? {
            return Err(SnapshotError::ArchiveExists(self.archive_dir.clone()));
        }
        Ok(())
    }

    /// Runs the snapshot to completion.
    pub async fn run<S: Session>(self, mut session: S) -> Result<(), SnapshotError> {
        self.ensure_archive_absent().await?;

        info!(archive = %self.archive_dir.display(), "awaiting catalog prerequisites");
        session.send(Request::AvailableLanguages).await?;

        let mut pending = Pending::default();
        loop {
            let Some(event) = session.next_event().await else {
                return Err(SnapshotError::SessionEnded);
            };
            if self.route_event(&mut session, &mut pending, event).await? {
                break;
            }
        }
        session.close().await;

        let catalog = pending.catalog.ok_or(SnapshotError::SessionEnded)?;
        let shop_info = ShopInfo::new(
            pending.base_timestamp,
            pending.ledger.snapshot(),
            &catalog,
        );

        let mut urls = assets::static_urls(&self.rules);
        urls.extend(assets::dynamic_urls(&self.rules, &catalog));
        urls.extend(assets::language_urls(&self.rules, &pending.languages));

        info!(assets = urls.len(), "catalog complete, downloading");
        self.download_and_write(urls, shop_info).await?;

        info!("archive written");
        Ok(())
    }

    /// Routes one event. Returns `true` once the readiness gate fires.
    async fn route_event<S: Session>(
        &self,
        session: &mut S,
        pending: &mut Pending,
        event: SessionEvent,
    ) -> Result<bool, SnapshotError> {
        let ready = match event {
            SessionEvent::LoginSuccess(login) => {
                debug!(player_id = login.player_id, "logged in, requesting shop");
                session.send(Request::LoadShop).await?;
                false
            }
            SessionEvent::BaseTimestamp(ts) => {
                pending.base_timestamp = Some(ts);
                false
            }
            SessionEvent::SpecialOffer(offer_event) => {
                pending.ledger.apply(&offer_event);
                false
            }
            SessionEvent::AvailableLanguages(languages) => {
                pending.languages = languages;
                pending.gate.languages_ready()
            }
            SessionEvent::ShopLoaded(contents) => {
                pending.catalog = Some(Catalog::from_contents(contents)?);
                pending.gate.catalog_ready()
            }
        };
        Ok(ready)
    }

    /// Runs every download plus the archive write as one fail-fast group.
    ///
    /// The first failure cancels the token; every remaining task reaches a
    /// terminal state before the failure is returned. `Cancelled` results
    /// from siblings are discarded.
    async fn download_and_write(
        &self,
        urls: Vec<String>,
        shop_info: ShopInfo,
    ) -> Result<(), SnapshotError> {
        let fetcher = Arc::new(Fetcher::new(&self.archive_dir));
        let cancel = CancellationToken::new();
        let mut tasks: JoinSet<Result<(), SnapshotError>> = JoinSet::new();

        for url in urls {
            let fetcher = fetcher.clone();
            let cancel = cancel.clone();
            tasks.spawn(async move {
                tokio::select! {
                    _ = cancel.cancelled() => Err(SnapshotError::Cancelled),
                    res = fetcher.ensure(&url) => {
                        res?;
                        Ok(())
                    }
                }
            });
        }

        // The write task depends only on in-memory state, not on any
        // download completing.
        let json = shop_info.to_json()?;
        {
            let archive_dir = self.archive_dir.clone();
            let cancel = cancel.clone();
            tasks.spawn(async move {
                tokio::select! {
                    _ = cancel.cancelled() => Err(SnapshotError::Cancelled),
                    res = write_shop_info(&archive_dir, json) => res,
                }
            });
        }

        let mut first_error = None;
        while let Some(joined) = tasks.join_next().await {
            let outcome = match joined {
                Ok(res) => res,
                Err(e) if e.is_panic() => Err(SnapshotError::TaskPanic),
                Err(_) => Err(SnapshotError::Cancelled),
            };
            if let Err(e) = outcome {
                cancel.cancel();
                if first_error.is_none() && !matches!(e, SnapshotError::Cancelled) {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

async fn write_shop_info(archive_dir: &Path, json: String) -> Result<(), SnapshotError> {
    tokio::fs::create_dir_all(archive_dir).await?;
    tokio::fs::write(archive_dir.join(SHOP_INFO_FILE), json).await?;
    Ok(())
}
