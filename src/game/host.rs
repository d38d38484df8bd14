//! Session ownership and the external game surface

use crate::core::{GameConfig, Role};
use crate::game::GameSession;
use crate::loader::WordCatalog;
use crate::{GameError, Result};
use rand::Rng;

/// Owns at most one [`GameSession`] and fronts every game operation
///
/// The presentation layer drives this instead of touching the session
/// directly: operations invoked while no game is running fail with
/// [`GameError::NoActiveSession`] rather than panicking, and `restart`
/// is simply "drop the session" — a fresh `start_game` re-deals.
#[derive(Debug, Default)]
pub struct GameHost {
    session: Option<GameSession>,
}

impl GameHost {
    pub fn new() -> Self {
        GameHost { session: None }
    }

    /// Deal a new game, replacing any session already in progress
    pub fn start_game(
        &mut self,
        config: &GameConfig,
        catalog: &WordCatalog,
        rng: &mut impl Rng,
    ) -> Result<()> {
        self.session = Some(GameSession::start(config, catalog, rng)?);
        Ok(())
    }

    /// Is a game currently running?
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// The running session, if any
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Show the active player's word
    pub fn reveal(&mut self) -> Result<()> {
        self.session_mut()?.reveal();
        Ok(())
    }

    /// Hide the word and pass to the next seat
    pub fn advance(&mut self) -> Result<()> {
        self.session_mut()?.advance();
        Ok(())
    }

    /// Host override: role at any seat, independent of turn state
    pub fn inspect(&self, player_index: usize) -> Result<&Role> {
        self.session
            .as_ref()
            .ok_or(GameError::NoActiveSession)?
            .inspect(player_index)
    }

    /// Discard the session and return to configuration
    pub fn restart(&mut self) {
        self.session = None;
    }

    fn session_mut(&mut self) -> Result<&mut GameSession> {
        self.session.as_mut().ok_or(GameError::NoActiveSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::WordPair;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fixture_catalog() -> WordCatalog {
        WordCatalog::new(vec![WordPair {
            common: "map 地图".to_string(),
            odd: "compass 指南针".to_string(),
        }])
    }

    #[test]
    fn test_operations_require_session() {
        let mut host = GameHost::new();
        assert!(matches!(
            host.reveal().unwrap_err(),
            GameError::NoActiveSession
        ));
        assert!(matches!(
            host.advance().unwrap_err(),
            GameError::NoActiveSession
        ));
        assert!(matches!(
            host.inspect(0).unwrap_err(),
            GameError::NoActiveSession
        ));
    }

    #[test]
    fn test_start_reveal_advance() {
        let mut host = GameHost::new();
        let config = GameConfig::new(5, 1, 1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        host.start_game(&config, &fixture_catalog(), &mut rng).unwrap();
        host.reveal().unwrap();
        assert!(host.session().unwrap().revealed());

        host.advance().unwrap();
        let session = host.session().unwrap();
        assert_eq!(session.current_turn(), 1);
        assert!(!session.revealed());
    }

    #[test]
    fn test_restart_drops_session() {
        let mut host = GameHost::new();
        let config = GameConfig::new(4, 1, 1).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        host.start_game(&config, &fixture_catalog(), &mut rng).unwrap();
        assert!(host.has_session());

        host.restart();
        assert!(!host.has_session());
        assert!(matches!(
            host.reveal().unwrap_err(),
            GameError::NoActiveSession
        ));
    }

    #[test]
    fn test_invalid_config_leaves_host_empty() {
        let mut host = GameHost::new();
        let config = GameConfig {
            total_players: 5,
            num_blanks: 4,
            num_spies: 2,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let err = host
            .start_game(&config, &fixture_catalog(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
        assert!(!host.has_session());
    }
}
