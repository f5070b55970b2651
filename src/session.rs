//! What the runner does with each drained [`GameEvent`].

use tracing::{debug, info, warn};

use crate::store::HighScoreFile;
use crate::term::CueSink;
use crate::types::GameEvent;

/// Log `ev`, persist a new high score, and forward it to `cues`.
///
/// Neither a failed save nor a failed cue stops the game; both are logged.
pub fn dispatch(ev: &GameEvent, store: &HighScoreFile, cues: &mut dyn CueSink) {
    match ev {
        GameEvent::Sorted { category } => debug!(category = category.as_str(), "sorted"),
        GameEvent::Missorted { letter, bin } => {
            debug!(letter = letter.as_str(), bin = bin.as_str(), "missorted")
        }
        GameEvent::SessionEnded {
            score,
            new_high_score,
        } => {
            info!(score, new_high_score, "session ended");
            if *new_high_score {
                if let Err(err) = store.save(*score) {
                    warn!("could not save high score: {err:#}");
                }
            }
        }
    }

    if let Err(err) = cues.cue(ev) {
        warn!("cue failed: {err:#}");
    }
}
