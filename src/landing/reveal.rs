/// Elements that fade in on scroll.
pub const REVEAL_SELECTORS: [&str; 4] = [
    ".sh-hero-copy > *",
    ".sh-card",
    ".sh-section h2",
    ".sh-section h3",
];

/// Tags an element as revealable.
pub const REVEAL_CLASS: &str = "sh-reveal";
/// Added once the element has been seen.
pub const REVEALED_CLASS: &str = "is-in";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction that counts as intersecting.
    pub threshold: f64,
    /// Bottom root margin as a percentage of the viewport (negative shrinks).
    pub root_margin_bottom_pct: f64,
}

/// Options the host passes to its intersection observer.
pub const OBSERVER_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.12,
    root_margin_bottom_pct: -8.0,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionEnv {
    pub reduced_motion: bool,
    pub observer_available: bool,
}

/// One observer callback entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intersection<T> {
    pub target: T,
    pub is_intersecting: bool,
}

#[derive(Clone, Debug)]
struct Target<T> {
    id: T,
    revealed: bool,
    observed: bool,
}

/// One-shot reveal-on-scroll over a fixed set of elements.
#[derive(Clone, Debug)]
pub struct Reveal<T> {
    targets: Vec<Target<T>>,
}

impl<T: Clone + PartialEq> Reveal<T> {
    /// Tags every element. Without motion or without an observer everything
    /// is revealed straight away.
    pub fn new(ids: impl IntoIterator<Item = T>, env: MotionEnv) -> Self {
        let animate = !env.reduced_motion && env.observer_available;
        let targets = ids
            .into_iter()
            .map(|id| Target {
                id,
                revealed: !animate,
                observed: animate,
            })
            .collect();
        Self { targets }
    }

    /// Elements the host should currently observe.
    pub fn observed(&self) -> impl Iterator<Item = &T> {
        self.targets.iter().filter(|t| t.observed).map(|t| &t.id)
    }

    pub fn is_revealed(&self, id: &T) -> bool {
        self.targets.iter().any(|t| &t.id == id && t.revealed)
    }

    pub fn all_revealed(&self) -> bool {
        self.targets.iter().all(|t| t.revealed)
    }

    /// Classes the element should carry right now.
    pub fn classes(&self, id: &T) -> Vec<&'static str> {
        match self.targets.iter().find(|t| &t.id == id) {
            Some(t) if t.revealed => vec![REVEAL_CLASS, REVEALED_CLASS],
            Some(_) => vec![REVEAL_CLASS],
            None => Vec::new(),
        }
    }

    /// Reveals every intersecting, still-observed element. Returns the ones
    /// the host should stop observing.
    pub fn on_intersect(&mut self, entries: &[Intersection<T>]) -> Vec<T> {
        let mut unobserve = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some(t) = self
                .targets
                .iter_mut()
                .find(|t| t.observed && t.id == entry.target)
            else {
                continue;
            };
            t.revealed = true;
            t.observed = false;
            unobserve.push(t.id.clone());
        }
        unobserve
    }
}

#[cfg(test)]
#[path = "../tests/landing/reveal_tests.rs"]
mod tests;
