use serde::Serialize;
use uuid::Uuid;

use crate::modules::preference::application::ports::outgoing::{PeerPreferences, Theme};

//
// ──────────────────────────────────────────────────────────
// Similar-users matching
// ──────────────────────────────────────────────────────────
// Shared interests dominate the score; a matching theme adds a small
// bonus. Users with nothing in common are not listed.
//

const INTEREST_WEIGHT: u32 = 10;
const THEME_BONUS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarUser {
    pub user_id: Uuid,
    pub username: String,
    pub score: u32,
    pub shared_interests: Vec<String>,
}

fn normalized(interests: &[String]) -> Vec<String> {
    interests
        .iter()
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .collect()
}

pub fn score_peer(own_interests: &[String], own_theme: Theme, peer: &PeerPreferences) -> Option<SimilarUser> {
    let own = normalized(own_interests);
    let theirs = normalized(&peer.interests);

    let shared_interests: Vec<String> = own
        .iter()
        .filter(|interest| theirs.contains(interest))
        .cloned()
        .collect();

    let mut score = shared_interests.len() as u32 * INTEREST_WEIGHT;
    if !shared_interests.is_empty() && peer.theme == own_theme {
        score += THEME_BONUS;
    }

    if score == 0 {
        return None;
    }

    Some(SimilarUser {
        user_id: peer.user_id,
        username: peer.username.clone(),
        score,
        shared_interests,
    })
}

/// Ranked most-similar first; ties broken by username for a stable order.
pub fn rank_similar_users(
    own_interests: &[String],
    own_theme: Theme,
    peers: &[PeerPreferences],
) -> Vec<SimilarUser> {
    let mut matches: Vec<SimilarUser> = peers
        .iter()
        .filter_map(|peer| score_peer(own_interests, own_theme, peer))
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score).then(a.username.cmp(&b.username)));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer(username: &str, theme: Theme, interests: &[&str]) -> PeerPreferences {
        PeerPreferences {
            user_id: Uuid::new_v4(),
            username: username.to_string(),
            theme,
            interests: interests.iter().map(|i| i.to_string()).collect(),
        }
    }

    #[test]
    fn test_no_overlap_is_excluded() {
        let result = score_peer(
            &["rust".to_string()],
            Theme::Dark,
            &peer("alex", Theme::Dark, &["cooking"]),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_theme_alone_does_not_match() {
        // Same theme with zero shared interests must not surface a user
        let result = score_peer(
            &["rust".to_string()],
            Theme::Dark,
            &peer("alex", Theme::Dark, &[]),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_interest_overlap_is_case_insensitive() {
        let result = score_peer(
            &["Rust".to_string(), "WASM".to_string()],
            Theme::Light,
            &peer("alex", Theme::Dark, &["rust", "wasm", "gamedev"]),
        )
        .unwrap();

        assert_eq!(result.score, 2 * INTEREST_WEIGHT);
        assert_eq!(result.shared_interests, vec!["rust", "wasm"]);
    }

    #[test]
    fn test_matching_theme_adds_bonus() {
        let result = score_peer(
            &["rust".to_string()],
            Theme::Dark,
            &peer("alex", Theme::Dark, &["rust"]),
        )
        .unwrap();

        assert_eq!(result.score, INTEREST_WEIGHT + THEME_BONUS);
    }

    #[test]
    fn test_ranking_orders_by_score_then_username() {
        let peers = vec![
            peer("zoe", Theme::Dark, &["rust"]),
            peer("amy", Theme::Dark, &["rust"]),
            peer("max", Theme::Light, &["rust", "wasm"]),
            peer("ned", Theme::Light, &["chess"]),
        ];

        let ranked = rank_similar_users(
            &["rust".to_string(), "wasm".to_string()],
            Theme::Dark,
            &peers,
        );

        let names: Vec<&str> = ranked.iter().map(|m| m.username.as_str()).collect();
        // max: 2 interests = 20; amy/zoe: 1 interest + theme = 13, amy first
        assert_eq!(names, vec!["max", "amy", "zoe"]);
    }
}
