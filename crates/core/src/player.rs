use crate::{
    Category, CategoryScore, DiceSource, Die, EventBus, Hand, Phase, Scorecard, Session,
    SessionError,
};

/// The side of the game that talks to a human (or a script). Input methods
/// return `None` when the player walks away; otherwise they must hand back
/// a valid answer, re-asking on bad input themselves.
pub trait Player {
    fn show_roll(&mut self, hand: &Hand, rerolls_left: u8);

    /// Face values to throw again, one entry per die. Every entry must be
    /// present in `hand` (repeated entries need as many copies).
    fn choose_reroll(&mut self, hand: &Hand, rerolls_left: u8) -> Option<Vec<Die>>;

    fn show_scores(&mut self, ranked: &[CategoryScore]);

    /// Must return a member of `available`.
    fn choose_category(&mut self, hand: &Hand, available: &[Category]) -> Option<Category>;

    fn show_total(&mut self, total: u32);

    fn show_scorecard(&mut self, scorecard: &Scorecard);
}

/// Runs one turn: roll, offer every re-roll, then score the chosen category.
pub fn play_turn<D: DiceSource, P: Player + ?Sized>(
    session: &mut Session<D>,
    player: &mut P,
    events: &mut EventBus,
) -> Result<CategoryScore, SessionError> {
    let mut hand = session.roll(events)?;
    player.show_roll(&hand, session.rerolls_left());
    while session.phase() == Phase::AwaitingReroll {
        let discard = player
            .choose_reroll(&hand, session.rerolls_left())
            .ok_or(SessionError::Abandoned)?;
        hand = session.reroll(&discard, events)?;
        player.show_roll(&hand, session.rerolls_left());
    }
    player.show_scores(&session.hints()?);
    let category = player
        .choose_category(&hand, session.available())
        .ok_or(SessionError::Abandoned)?;
    let entry = session.commit(category, events)?;
    player.show_total(session.total());
    Ok(entry)
}

/// Plays turns until every category is filled and returns the scorecard.
pub fn play<D: DiceSource, P: Player + ?Sized>(
    session: &mut Session<D>,
    player: &mut P,
    events: &mut EventBus,
) -> Result<Scorecard, SessionError> {
    while !session.is_complete() {
        play_turn(session, player, events)?;
    }
    let scorecard = session.scorecard()?;
    player.show_scorecard(&scorecard);
    Ok(scorecard)
}
