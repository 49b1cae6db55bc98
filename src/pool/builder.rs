//! Weighted pool construction
//!
//! Expands a set of advertisements plus a vendor weight map into the flat,
//! replicated entry list for one position. The output is pre-shuffle: entry
//! order follows catalog order and is randomized separately by
//! [`super::shuffle`] once per rebuild.
//!
//! # Position rules
//!
//! - `TopBanner`: each ad contributes at most one responsive mobile/desktop
//!   pair per weight unit, and only if it has at least one of the two
//!   variants. Ads with neither are excluded entirely, silently — vendor
//!   content is expected to be incomplete at times.
//! - Every other position: each image an ad owns contributes one entry per
//!   weight unit, regardless of viewport type.
//!
//! A vendor with effective weight 0 contributes nothing. Invalid weight
//! values never reach this code: [`crate::config::weights`] coerces them to
//! the default at parse time, because a corrupt replication count would
//! corrupt the whole pool.

use std::sync::Arc;

use crate::config::weights::VendorWeights;
use crate::model::{Advertisement, Displayable, PoolEntry, Position, ResponsiveImagePair};
use crate::pool::Pool;

/// Build the pre-shuffle pool for one position
///
/// `ads` must already be filtered to `position` and the active date window
/// (the catalog source's responsibility). An empty ad list produces an empty
/// pool; callers treat that as "nothing to display".
pub fn build_pool(ads: &[Advertisement], weights: &VendorWeights, position: Position) -> Pool {
    let mut entries = Vec::new();

    for ad in ads {
        let weight = weights.resolve(&ad.vendor_slug);
        if weight == 0 {
            continue;
        }

        let displayables = displayables_for(ad, position);
        if displayables.is_empty() {
            continue;
        }

        let shared = Arc::new(ad.clone());
        for displayable in displayables {
            for _ in 0..weight {
                entries.push(PoolEntry {
                    displayable: displayable.clone(),
                    ad: Arc::clone(&shared),
                });
            }
        }
    }

    Pool::new(position, entries)
}

/// Display units one ad contributes, before weight replication
fn displayables_for(ad: &Advertisement, position: Position) -> Vec<Displayable> {
    match position {
        Position::TopBanner => ResponsiveImagePair::from_ad(ad)
            .map(Displayable::Responsive)
            .into_iter()
            .collect(),
        Position::LeftBanner | Position::RightBanner | Position::Feed => ad
            .images
            .iter()
            .cloned()
            .map(Displayable::Single)
            .collect(),
    }
}
