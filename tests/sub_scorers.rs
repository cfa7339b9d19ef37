use game_match::config::{
    CommunityConfig, GenreConfig, HistoryConfig, PlatformConfig, RatingConfig,
};
use game_match::scoring::{
    genre_score, platform_score, rating_score, MetadataCommunitySignal, ProxyHistorySignal,
};
use game_match::{GameProfile, GenreEntry, MatchError, UserProfile, UserStats};

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_lowercase()).collect()
}

fn game_with_rating(ggdb_rating: Option<f64>) -> GameProfile {
    GameProfile {
        ggdb_rating,
        ..GameProfile::default()
    }
}

#[test]
fn genre_score_counts_partial_and_exact_matches() {
    let score = genre_score(&names(&["RPG"]), &names(&["RPG", "Action"]), &GenreConfig::default());
    assert!((score - 60.0).abs() < 1e-9);
}

#[test]
fn genre_score_uses_bidirectional_containment() {
    let config = GenreConfig::default();

    let narrower_favorite = genre_score(&names(&["rpg"]), &names(&["Action RPG"]), &config);
    assert!((narrower_favorite - 100.0).abs() < 1e-9);

    let broader_favorite = genre_score(&names(&["action rpg"]), &names(&["RPG"]), &config);
    assert!((broader_favorite - 100.0).abs() < 1e-9);
}

#[test]
fn genre_score_is_zero_without_game_genres() {
    let score = genre_score(&names(&["RPG", "Action"]), &[], &GenreConfig::default());
    assert_eq!(score, 0.0);
}

#[test]
fn genre_score_ignores_case() {
    let config = GenreConfig::default();
    let upper_user = genre_score(&names(&["RPG"]), &names(&["rpg"]), &config);
    let upper_game = genre_score(&names(&["rpg"]), &names(&["RPG"]), &config);
    assert_eq!(upper_user, upper_game);
    assert_eq!(upper_user, 100.0);
}

#[test]
fn genre_score_caps_at_one_hundred() {
    let score = genre_score(
        &names(&["shooter", "puzzle"]),
        &names(&["Shooter", "Puzzle"]),
        &GenreConfig::default(),
    );
    assert_eq!(score, 100.0);
}

#[test]
fn rating_score_penalizes_distance() {
    let score = rating_score(8.0, 8.2, &RatingConfig::default()).unwrap();
    assert!((score - 97.0).abs() < 1e-6);

    let far = rating_score(9.0, 1.0, &RatingConfig::default()).unwrap();
    assert_eq!(far, 0.0);
}

#[test]
fn rating_score_rewards_high_ratings() {
    let score = rating_score(7.5, 9.0, &RatingConfig::default()).unwrap();
    assert!((score - 87.5).abs() < 1e-9);

    let capped = rating_score(9.0, 9.0, &RatingConfig::default()).unwrap();
    assert_eq!(capped, 100.0);
}

#[test]
fn rating_score_rejects_non_finite_input() {
    let err = rating_score(f64::NAN, 8.0, &RatingConfig::default()).unwrap_err();
    assert!(matches!(err, MatchError::NonFiniteValue { .. }));
}

#[test]
fn effective_rating_falls_back_to_metacritic_then_constant() {
    let site = GameProfile {
        ggdb_rating: Some(8.1),
        metacritic_score: Some(60.0),
        ..GameProfile::default()
    };
    assert_eq!(site.effective_rating(7.0), 8.1);

    let critic = GameProfile {
        metacritic_score: Some(90.0),
        ..GameProfile::default()
    };
    assert_eq!(critic.effective_rating(7.0), 9.0);

    assert_eq!(GameProfile::default().effective_rating(7.0), 7.0);
}

#[test]
fn platform_score_is_binary() {
    let config = PlatformConfig::default();
    let owned = names(&["PlayStation"]);

    let current = names(&["PlayStation 5", "PC"]);
    let handheld = names(&["Switch"]);

    let compatible = platform_score(Some(owned.as_slice()), Some(current.as_slice()), &config);
    let incompatible = platform_score(Some(owned.as_slice()), Some(handheld.as_slice()), &config);
    let missing_user = platform_score(None, Some(current.as_slice()), &config);
    let missing_game = platform_score(Some(owned.as_slice()), None, &config);

    assert_eq!(compatible, 100.0);
    assert_eq!(incompatible, 0.0);
    assert_eq!(missing_user, 50.0);
    assert_eq!(missing_game, 50.0);
}

#[test]
fn platform_score_treats_empty_lists_as_incompatible() {
    let owned: Vec<String> = Vec::new();
    let game = names(&["PC"]);
    let score = platform_score(
        Some(owned.as_slice()),
        Some(game.as_slice()),
        &PlatformConfig::default(),
    );
    assert_eq!(score, 0.0);
}

#[test]
fn community_score_uses_rating_tiers() {
    let signal = MetadataCommunitySignal::new(CommunityConfig::default());
    let cases = [
        (9.0, 95.0),
        (8.7, 85.0),
        (8.5, 85.0),
        (8.0, 75.0),
        (7.5, 65.0),
        (7.2, 55.0),
        (7.0, 55.0),
        (6.9, 50.0),
    ];
    for (rating, expected) in cases {
        let score = signal.score(&game_with_rating(Some(rating))).unwrap();
        assert!((score - expected).abs() < 1e-9, "rating {} scored {}", rating, score);
    }
}

#[test]
fn community_score_accepts_tiers_in_any_order() {
    let mut config = CommunityConfig::default();
    config.tiers.reverse();
    let signal = MetadataCommunitySignal::new(config);

    for (rating, expected) in [(9.3, 95.0), (8.5, 85.0), (7.0, 55.0), (6.0, 50.0)] {
        let score = signal.score(&game_with_rating(Some(rating))).unwrap();
        assert_eq!(score, expected, "rating {} scored {}", rating, score);
    }
}

#[test]
fn community_score_falls_back_to_raw_rating_field() {
    let signal = MetadataCommunitySignal::default();
    let game = GameProfile {
        rating: Some(7.6),
        ..GameProfile::default()
    };
    assert_eq!(signal.score(&game).unwrap(), 65.0);
    assert_eq!(signal.score(&GameProfile::default()).unwrap(), 50.0);
}

#[test]
fn community_score_adds_popularity_and_flags() {
    let signal = MetadataCommunitySignal::default();
    let game = GameProfile {
        ggdb_rating: Some(8.2),
        votes: Some(500.0),
        is_top_rated: true,
        ..GameProfile::default()
    };
    assert!((signal.score(&game).unwrap() - 85.0).abs() < 1e-9);

    let flagged = GameProfile {
        votes: Some(250.0),
        is_trending: true,
        is_new: true,
        ..GameProfile::default()
    };
    assert!((signal.score(&flagged).unwrap() - 65.5).abs() < 1e-9);
}

#[test]
fn community_score_caps_popularity_and_total() {
    let signal = MetadataCommunitySignal::default();
    let popular = GameProfile {
        ggdb_rating: Some(6.0),
        votes: Some(100_000.0),
        ..GameProfile::default()
    };
    assert_eq!(signal.score(&popular).unwrap(), 65.0);

    let everything = GameProfile {
        ggdb_rating: Some(9.8),
        votes: Some(100_000.0),
        is_trending: true,
        is_top_rated: true,
        is_new: true,
        ..GameProfile::default()
    };
    assert_eq!(signal.score(&everything).unwrap(), 100.0);
}

#[test]
fn history_score_is_neutral_without_both_parties() {
    let signal = ProxyHistorySignal::new(HistoryConfig::default());
    let game = game_with_rating(Some(8.0));
    assert_eq!(signal.score(None, Some(&game)).unwrap(), 50.0);
    assert_eq!(signal.score(Some(&UserProfile::default()), None).unwrap(), 50.0);
}

#[test]
fn history_score_replaces_base_with_genre_ratio() {
    let signal = ProxyHistorySignal::default();
    let user = UserProfile {
        favorite_genres: Some(vec![GenreEntry::from("RPG")]),
        ..UserProfile::default()
    };
    let game = GameProfile {
        genres: Some(vec!["Action RPG".to_string(), "Open World".to_string()]),
        ..GameProfile::default()
    };
    assert!((signal.score(Some(&user), Some(&game)).unwrap() - 50.0).abs() < 1e-9);

    let no_genres = GameProfile {
        genres: Some(Vec::new()),
        ..GameProfile::default()
    };
    assert_eq!(signal.score(Some(&user), Some(&no_genres)).unwrap(), 30.0);
}

#[test]
fn history_score_rewards_close_ratings() {
    let signal = ProxyHistorySignal::default();
    let user = UserProfile {
        stats: Some(UserStats {
            average_rating: Some(8.0),
        }),
        ..UserProfile::default()
    };

    let close = signal.score(Some(&user), Some(&game_with_rating(Some(8.9)))).unwrap();
    let near = signal.score(Some(&user), Some(&game_with_rating(Some(6.5)))).unwrap();
    let far = signal.score(Some(&user), Some(&game_with_rating(Some(5.0)))).unwrap();
    let unrated = signal.score(Some(&user), Some(&game_with_rating(None))).unwrap();

    assert_eq!(close, 65.0);
    assert_eq!(near, 55.0);
    assert_eq!(far, 50.0);
    assert_eq!(unrated, 50.0);
}

#[test]
fn history_rating_bonus_bounds_are_inclusive() {
    let signal = ProxyHistorySignal::default();
    let user = UserProfile {
        stats: Some(UserStats {
            average_rating: Some(8.0),
        }),
        ..UserProfile::default()
    };
    let cases = [(7.0, 65.0), (9.0, 65.0), (6.0, 55.0), (10.0, 55.0)];

    for (game_rating, expected) in cases {
        let game = game_with_rating(Some(game_rating));
        let score = signal.score(Some(&user), Some(&game)).unwrap();
        assert_eq!(score, expected, "game rating {} scored {}", game_rating, score);
    }
}

#[test]
fn history_score_requires_real_user_rating_for_bonus() {
    let signal = ProxyHistorySignal::default();
    let game = game_with_rating(Some(7.5));
    let score = signal.score(Some(&UserProfile::default()), Some(&game)).unwrap();
    assert_eq!(score, 50.0);
}
