//! Quiz session use case
//!
//! Owns the breed catalog cache and the observable session state, and
//! drives the two user-facing operations: loading a new question and
//! grading an answer.

use crate::ports::breed_provider::BreedProvider;
use crate::ports::progress::{NoQuizProgress, QuizProgressNotifier};
use guess_breed_domain::{
    Breed, BreedCatalog, OPTION_COUNT, QuizOutcome, QuizQuestion, SessionState,
};
use rand::RngCore;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Upper bound on distractor draws per catalog entry
const MAX_DRAWS_PER_BREED: usize = 64;

/// Resets `is_loading` and closes progress when a load ends, however it ends
///
/// Covers normal returns, panics inside provider calls, and the load
/// future being dropped before completion. An unfinished load is reported
/// to the progress notifier as a failure.
struct LoadingGuard<'a> {
    state: Arc<watch::Sender<SessionState>>,
    progress: &'a dyn QuizProgressNotifier,
    finished: bool,
}

impl<'a> LoadingGuard<'a> {
    fn start(
        state: Arc<watch::Sender<SessionState>>,
        progress: &'a dyn QuizProgressNotifier,
    ) -> Self {
        progress.on_load_start();
        state.send_modify(|s| s.is_loading = true);
        Self {
            state,
            progress,
            finished: false,
        }
    }

    fn finish(mut self, success: bool) {
        self.finished = true;
        self.progress.on_load_complete(success);
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|s| {
            let was_loading = s.is_loading;
            s.is_loading = false;
            was_loading
        });
        if !self.finished {
            self.progress.on_load_complete(false);
        }
    }
}

/// A single-player "guess the breed" session
///
/// The session is driven from one context at a time: `request_new_question`
/// borrows it mutably, so a second load cannot start while one is in
/// flight. Front ends observe state through [`QuizSession::subscribe`].
pub struct QuizSession<P: BreedProvider + 'static> {
    provider: Arc<P>,
    random: Box<dyn RngCore + Send>,
    catalog: Option<BreedCatalog>,
    state: Arc<watch::Sender<SessionState>>,
}

impl<P: BreedProvider + 'static> QuizSession<P> {
    pub fn new(provider: Arc<P>, random: Box<dyn RngCore + Send>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            provider,
            random,
            catalog: None,
            state: Arc::new(state),
        }
    }

    /// Receive every published state change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// The cached catalog, once a fetch has succeeded
    pub fn catalog(&self) -> Option<&BreedCatalog> {
        self.catalog.as_ref()
    }

    /// Load a new question with default (no-op) progress
    pub async fn request_new_question(&mut self) {
        self.request_new_question_with_progress(&NoQuizProgress)
            .await
    }

    /// Load a new question, reporting start and completion to `progress`
    ///
    /// Never fails: when the catalog or the image cannot be fetched the
    /// current question is cleared and the caller may simply try again.
    pub async fn request_new_question_with_progress(
        &mut self,
        progress: &dyn QuizProgressNotifier,
    ) {
        let guard = LoadingGuard::start(Arc::clone(&self.state), progress);

        let question = self.load_question().await;
        let success = question.is_some();

        // Publish the question and clear the loading flag in one update
        self.state.send_modify(|s| {
            match question {
                Some(question) => {
                    s.question = Some(question);
                    s.show_result = false;
                }
                None => s.question = None,
            }
            s.is_loading = false;
        });

        guard.finish(success);
    }

    /// Grade the user's answer against the current question
    ///
    /// Returns `None` and leaves the state untouched when no question is
    /// loaded.
    pub fn user_selected(&mut self, answer: &Breed) -> Option<QuizOutcome> {
        let outcome = {
            let state = self.state.borrow();
            let Some(question) = state.question.as_ref() else {
                warn!("Answer '{}' selected with no question loaded", answer);
                return None;
            };
            QuizOutcome::grade(answer, question.correct_breed())
        };

        debug!(
            "Graded answer '{}': {}",
            answer,
            if outcome.is_correct() { "correct" } else { "incorrect" }
        );

        let correct = outcome.is_correct();
        self.state.send_modify(|s| {
            s.user_got_it_right = correct;
            s.show_result = true;
        });

        Some(outcome)
    }

    async fn load_question(&mut self) -> Option<QuizQuestion> {
        if !self.ensure_catalog().await {
            return None;
        }
        let catalog = self.catalog.as_ref()?;
        let (correct, options) = select_options(catalog, self.random.as_mut())?;

        let image_url = match self.provider.fetch_image(&correct).await {
            Ok(url) => url,
            Err(e) => {
                warn!("Failed to fetch image for '{}' ({}): {}", correct, e.kind(), e);
                return None;
            }
        };

        match QuizQuestion::new(image_url, correct, options) {
            Ok(question) => {
                info!("New question ready: {}", question.correct_breed());
                Some(question)
            }
            Err(e) => {
                warn!("Discarding malformed question: {}", e);
                None
            }
        }
    }

    /// Fetch and cache the catalog unless it is already cached
    async fn ensure_catalog(&mut self) -> bool {
        if self.catalog.is_some() {
            debug!("Reusing cached breed catalog");
            return true;
        }

        let breeds = match self.provider.fetch_catalog().await {
            Ok(breeds) => breeds,
            Err(e) => {
                warn!("Failed to fetch breed catalog ({}): {}", e.kind(), e);
                return false;
            }
        };

        match BreedCatalog::new(breeds) {
            Ok(catalog) => {
                info!("Cached breed catalog with {} breeds", catalog.as_slice().len());
                self.catalog = Some(catalog);
                true
            }
            Err(e) => {
                warn!("Breed catalog rejected: {}", e);
                false
            }
        }
    }
}

/// Pick the correct breed and a shuffled set of distinct options
///
/// Distractors are redrawn until the set is full. Draws are bounded so a
/// degenerate random source cannot stall a load; past the bound the set is
/// topped up in catalog order.
fn select_options<R: RngCore + ?Sized>(
    catalog: &BreedCatalog,
    random: &mut R,
) -> Option<(Breed, Vec<Breed>)> {
    let breeds = catalog.as_slice();
    let correct = breeds.choose(random)?.clone();

    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(correct.clone());

    let mut draws = 0;
    let max_draws = MAX_DRAWS_PER_BREED * breeds.len();
    while options.len() < OPTION_COUNT && draws < max_draws {
        draws += 1;
        let candidate = breeds.choose(random)?;
        if !options.contains(candidate) {
            options.push(candidate.clone());
        }
    }

    if options.len() < OPTION_COUNT {
        debug!("Random draws exhausted after {}, filling options in order", draws);
        for breed in breeds {
            if options.len() == OPTION_COUNT {
                break;
            }
            if !options.contains(breed) {
                options.push(breed.clone());
            }
        }
    }

    options.shuffle(random);
    Some((correct, options))
}
