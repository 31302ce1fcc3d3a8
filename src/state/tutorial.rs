// Onboarding carousel: fixed steps and a clamped cursor over them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TutorialStep {
    pub title: &'static str,
    pub description: &'static str,
    /// CSS selector of the element to spotlight, if any.
    pub highlight: Option<&'static str>,
}

pub const TUTORIAL_STEPS: &[TutorialStep] = &[
    TutorialStep {
        title: "Welcome to Habitual Adventure!",
        description: "This is not an ordinary to-do list, it is an RPG. Complete real-life tasks to level up your character!",
        highlight: None,
    },
    TutorialStep {
        title: "Check your status",
        description: "This is your HUD. It shows your level, your title and your current experience (XP).",
        highlight: Some(".hud-display"),
    },
    TutorialStep {
        title: "Accept new mission",
        description: "Type a habit you want to build here, pick an icon, then press \"+\".",
        highlight: Some(".input-group"),
    },
    TutorialStep {
        title: "View level rewards",
        description: "Open the menu in the top-left corner to see upcoming rewards and unlockable features.",
        highlight: Some(".menu-btn"),
    },
    TutorialStep {
        title: "Adventure Guide",
        description: "Forgot how something works? Click the book in the top-right corner to reopen this guide.",
        highlight: Some(".tutorial-btn"),
    },
    TutorialStep {
        title: "Let the adventure begin!",
        description: "Now add your first mission, or complete one of the starter missions to earn your first XP!",
        highlight: None,
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TutorialCursor {
    index: usize,
}

impl TutorialCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static TutorialStep {
        &TUTORIAL_STEPS[self.index]
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= TUTORIAL_STEPS.len()
    }

    pub fn next(self) -> Self {
        if self.is_last() { self } else { Self { index: self.index + 1 } }
    }

    pub fn prev(self) -> Self {
        Self { index: self.index.saturating_sub(1) }
    }

    pub fn restart(self) -> Self {
        Self::default()
    }
}
