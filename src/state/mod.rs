//! Selection state - which category is loaded and which post is shown
//!
//! One `ViewerState` is owned by the driving task and mutated only through
//! its transition methods. Loads are bracketed by [`ViewerState::begin_load`]
//! and [`ViewerState::finish_load`]; the ticket passed between them carries a
//! generation number so a load that was overtaken by a newer category switch
//! is discarded instead of overwriting fresher state.

use crate::content::Post;

/// Token for one load cycle, handed out by [`ViewerState::begin_load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Observable phase of the viewer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No category has been asked for yet
    NoCategory,
    /// A load is in flight; posts and selection are cleared
    Loading,
    /// The current category loaded with at least one post
    Loaded,
    /// The current category has an empty file list
    Empty,
}

/// View state of the notes viewer
#[derive(Debug, Default)]
pub struct ViewerState {
    current_category: Option<String>,
    posts: Vec<Post>,
    selected: Option<String>,
    generation: u64,
    loaded: bool,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to a category: previous posts and selection are discarded and a
    /// ticket for the new load cycle is returned.
    pub fn begin_load(&mut self, category: &str) -> LoadTicket {
        self.generation += 1;
        self.current_category = Some(category.to_string());
        self.posts.clear();
        self.selected = None;
        self.loaded = false;

        LoadTicket {
            generation: self.generation,
        }
    }

    /// Install the loaded posts, selecting the first one.
    ///
    /// Returns false and leaves state untouched when the ticket is stale,
    /// i.e. another `begin_load` happened after the one that issued it.
    pub fn finish_load(&mut self, ticket: LoadTicket, posts: Vec<Post>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding stale load result (generation {}, now {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.selected = posts.first().map(|p| p.id.clone());
        self.posts = posts;
        self.loaded = true;
        true
    }

    /// Move the selection to another already-loaded post.
    ///
    /// Returns false for an id that is not in the loaded list; there is no
    /// manual deselection.
    pub fn select(&mut self, id: &str) -> bool {
        if self.posts.iter().any(|p| p.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.current_category {
            None => Phase::NoCategory,
            Some(_) if !self.loaded => Phase::Loading,
            Some(_) if self.posts.is_empty() => Phase::Empty,
            Some(_) => Phase::Loaded,
        }
    }

    pub fn current_category(&self) -> Option<&str> {
        self.current_category.as_deref()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// The selected post, resolved by id lookup
    pub fn selected_post(&self) -> Option<&Post> {
        let id = self.selected.as_ref()?;
        self.posts.iter().find(|p| &p.id == id)
    }
}
