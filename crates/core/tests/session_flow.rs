use yatzy_core::{
    play, play_turn, Category, CategoryScore, Die, EventBus, GameConfig, Hand, Player, Scorecard,
    ScriptedDice, Session, SessionError,
};

/// Plays by fixed rules: re-rolls every die not matching the most common
/// face, then takes the best-scoring open category.
#[derive(Default)]
struct GreedyPlayer {
    rolls_seen: usize,
    hints_seen: Vec<Vec<CategoryScore>>,
    totals: Vec<u32>,
    scorecard: Option<Scorecard>,
}

impl Player for GreedyPlayer {
    fn show_roll(&mut self, hand: &Hand, _rerolls_left: u8) {
        assert_eq!(hand.dice().len(), 5);
        self.rolls_seen += 1;
    }

    fn choose_reroll(&mut self, hand: &Hand, _rerolls_left: u8) -> Option<Vec<Die>> {
        let counts = hand.counts();
        let (keep, _) = counts
            .high_to_low()
            .max_by_key(|(_, count)| *count)
            .expect("six faces");
        Some(hand.dice().iter().copied().filter(|die| *die != keep).collect())
    }

    fn show_scores(&mut self, ranked: &[CategoryScore]) {
        self.hints_seen.push(ranked.to_vec());
    }

    fn choose_category(&mut self, _hand: &Hand, available: &[Category]) -> Option<Category> {
        let best = self.hints_seen.last().and_then(|hints| hints.first())?;
        assert!(available.contains(&best.category));
        Some(best.category)
    }

    fn show_total(&mut self, total: u32) {
        self.totals.push(total);
    }

    fn show_scorecard(&mut self, scorecard: &Scorecard) {
        self.scorecard = Some(scorecard.clone());
    }
}

struct WalkAway;

impl Player for WalkAway {
    fn show_roll(&mut self, _hand: &Hand, _rerolls_left: u8) {}

    fn choose_reroll(&mut self, _hand: &Hand, _rerolls_left: u8) -> Option<Vec<Die>> {
        Some(Vec::new())
    }

    fn show_scores(&mut self, _ranked: &[CategoryScore]) {}

    fn choose_category(&mut self, _hand: &Hand, _available: &[Category]) -> Option<Category> {
        None
    }

    fn show_total(&mut self, _total: u32) {}

    fn show_scorecard(&mut self, _scorecard: &Scorecard) {}
}

fn scripted(values: &[u8]) -> ScriptedDice {
    ScriptedDice::from_values(values).expect("script")
}

#[test]
fn full_registry_session_takes_fifteen_turns() {
    let mut events = EventBus::default();
    let mut session = Session::new(
        GameConfig::default(),
        scripted(&[3, 1, 4, 1, 5, 2, 6, 5, 3, 5, 6, 2]),
    )
    .expect("session");
    let mut player = GreedyPlayer::default();
    let registry = Category::ALL.len();

    let mut turns = 0;
    while !session.is_complete() {
        play_turn(&mut session, &mut player, &mut events).expect("turn");
        turns += 1;
        let sum: u32 = session.scored().iter().map(|entry| entry.score).sum();
        assert_eq!(session.total(), sum);
        assert_eq!(session.available().len() + session.scored().len(), registry);
        assert_eq!(session.scored().len(), turns);
    }
    assert_eq!(turns, registry);
    assert!(session.available().is_empty());
    assert_eq!(player.rolls_seen, registry * 3);
    assert_eq!(player.totals.len(), registry);

    let scorecard = session.scorecard().expect("scorecard");
    assert_eq!(scorecard.total, session.total());
    assert_eq!(scorecard.entries.len(), registry);
    assert!(scorecard
        .entries
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn play_drives_to_completion_and_presents_the_scorecard() {
    let mut events = EventBus::default();
    let config = GameConfig::with_categories(vec![
        Category::Yatzy,
        Category::Chance,
        Category::Sixes,
    ]);
    let mut session = Session::new(config, scripted(&[6])).expect("session");
    let mut player = GreedyPlayer::default();
    let scorecard = play(&mut session, &mut player, &mut events).expect("play");

    let listed: Vec<(Category, u32)> = scorecard
        .entries
        .iter()
        .map(|entry| (entry.category, entry.score))
        .collect();
    assert_eq!(
        listed,
        vec![
            (Category::Yatzy, 50),
            (Category::Chance, 30),
            (Category::Sixes, 30)
        ]
    );
    assert_eq!(scorecard.total, 110);
    assert_eq!(player.scorecard, Some(scorecard));
    assert_eq!(player.totals, vec![50, 80, 110]);
}

#[test]
fn scorecard_ties_follow_commit_order() {
    // Every roll is 1,1,2,2,2: FullHouse 8, ThreeOfAKind 6, Twos 6, Yatzy 0.
    let mut events = EventBus::default();
    let config = GameConfig::with_categories(vec![
        Category::Yatzy,
        Category::Twos,
        Category::ThreeOfAKind,
        Category::FullHouse,
    ]);
    let mut session = Session::new(config, scripted(&[1, 1, 2, 2, 2])).expect("session");
    for category in [
        Category::FullHouse,
        Category::Twos,
        Category::ThreeOfAKind,
        Category::Yatzy,
    ] {
        session.roll(&mut events).expect("roll");
        session.reroll(&[], &mut events).expect("reroll");
        session.reroll(&[], &mut events).expect("reroll");
        session.commit(category, &mut events).expect("commit");
    }
    let order: Vec<(Category, u32)> = session
        .scorecard()
        .expect("scorecard")
        .entries
        .into_iter()
        .map(|entry| (entry.category, entry.score))
        .collect();
    assert_eq!(
        order,
        vec![
            (Category::FullHouse, 8),
            (Category::Twos, 6),
            (Category::ThreeOfAKind, 6),
            (Category::Yatzy, 0)
        ]
    );
}

#[test]
fn scorecard_is_unavailable_mid_game() {
    let session = Session::new(GameConfig::default(), scripted(&[1])).expect("session");
    assert!(matches!(
        session.scorecard(),
        Err(SessionError::InvalidPhase(_))
    ));
}

#[test]
fn walking_away_abandons_the_session() {
    let mut events = EventBus::default();
    let mut session = Session::new(GameConfig::default(), scripted(&[2, 3])).expect("session");
    let result = play(&mut session, &mut WalkAway, &mut events);
    assert!(matches!(result, Err(SessionError::Abandoned)));
    assert!(session.scored().is_empty());
}
