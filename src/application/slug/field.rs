use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::ports::emitter::FieldEmitter;
use crate::application::ports::record_cache::RecordCache;
use crate::application::ports::record_store::RecordStore;
use crate::application::slug::context::FieldContext;
use crate::application::slug::resolver::SourceResolver;
use crate::application::slug::validator::SlugValidator;
use crate::config::SlugFieldOptions;
use crate::domain::record::{CollectionName, SourceLocator};
use crate::domain::slug::{SlugVerdict, slugify};

/// The slug field engine. The host forwards its form events here; every
/// handler runs the relevant slice of the resolve → derive → validate →
/// emit sequence and pushes results through the [`FieldEmitter`] port.
///
/// All state lives on this struct and handlers take `&mut self`: the host
/// drives the field from a single event loop, and overlapping async
/// sequences settle last-write-wins as the transform is idempotent.
pub struct SlugField {
    options: SlugFieldOptions,
    context: FieldContext,
    locator: Option<SourceLocator>,
    source_collection: Option<CollectionName>,
    validator: SlugValidator,
    resolver: SourceResolver,
    emitter: Arc<dyn FieldEmitter>,
    value: String,
    verdict: SlugVerdict,
    blocking: bool,
    disabled: bool,
    editing: bool,
    edit_cache: Option<String>,
}

impl SlugField {
    pub fn new(
        options: SlugFieldOptions,
        context: FieldContext,
        store: Arc<dyn RecordStore>,
        cache: Arc<dyn RecordCache>,
        emitter: Arc<dyn FieldEmitter>,
        initial_value: Option<String>,
    ) -> ApplicationResult<Self> {
        let locator = options.source_locator()?;
        let source_collection = options.source_collection()?;
        Ok(Self {
            validator: SlugValidator::new(Arc::clone(&store)),
            resolver: SourceResolver::new(store, cache),
            emitter,
            value: initial_value.unwrap_or_default(),
            verdict: SlugVerdict::Valid,
            blocking: false,
            disabled: false,
            editing: false,
            edit_cache: None,
            locator,
            source_collection,
            options,
            context,
        })
    }

    /// First event after the host renders the field. An empty slug on an
    /// existing record is generated from the source right away; the value
    /// is validated once regardless.
    pub async fn mount(&mut self) {
        if self.value.is_empty()
            && self.options.auto
            && self.locator.is_some()
            && self.context.record_id.is_some()
        {
            if let Some(source) = self.resolve_source().await {
                self.value = self.derive(&source);
                self.revalidate().await;
                self.emitter.emit_value(&self.value);
            }
        }
        self.revalidate().await;
    }

    /// Raw text typed into the field. Clearing the field regenerates from
    /// the source; typing derives on the fly until the user has started a
    /// manual edit of a non-empty value, after which input is taken
    /// verbatim.
    pub async fn input(&mut self, raw: &str) {
        if raw.is_empty() && self.options.auto && self.locator.is_some() {
            self.value = match self.resolve_source().await {
                Some(source) => self.derive(&source),
                None => String::new(),
            };
        } else if self.options.auto && !self.manual_edit_started() {
            self.value = self.derive(raw);
        } else {
            self.value = raw.to_string();
        }
        self.revalidate().await;
        self.emitter.emit_value(&self.value);
    }

    /// The host wrote a new value into the field from outside.
    pub async fn sync_value(&mut self, new_value: Option<&str>) {
        let incoming = new_value.unwrap_or_default();
        if incoming != self.value {
            self.value = incoming.to_string();
            self.revalidate().await;
        }
    }

    /// Live change of the source field's value while the record is open.
    /// Lets an empty slug catch up when the source is filled in later.
    pub async fn source_value_changed(&mut self, new_source: Option<&str>) {
        let Some(source) = new_source.filter(|text| !text.is_empty()) else {
            return;
        };
        if self.options.auto && self.value.is_empty() {
            self.value = self.derive(source);
            self.revalidate().await;
            self.emitter.emit_value(&self.value);
        }
    }

    /// Replaces the field options. A changed source locator or source
    /// collection re-resolves and re-derives unconditionally.
    pub async fn set_options(&mut self, options: SlugFieldOptions) -> ApplicationResult<()> {
        let locator = options.source_locator()?;
        let source_collection = options.source_collection()?;
        let source_changed =
            locator != self.locator || source_collection != self.source_collection;

        self.options = options;
        self.locator = locator;
        self.source_collection = source_collection;

        if source_changed && self.options.auto && self.context.record_id.is_some() {
            if let Some(source) = self.resolve_source().await {
                self.value = self.derive(&source);
                self.revalidate().await;
                self.emitter.emit_value(&self.value);
            }
        }
        Ok(())
    }

    /// Explicit regenerate action; ignores auto-generate timing and
    /// overwrites whatever is in the field, provided a source resolves.
    pub async fn regenerate(&mut self) {
        if self.locator.is_none() {
            return;
        }
        match self.resolve_source().await {
            Some(source) => {
                self.value = self.derive(&source);
                self.revalidate().await;
                self.emitter.emit_value(&self.value);
            }
            None => tracing::warn!("cannot regenerate slug: no source value available"),
        }
    }

    /// User activated free-text editing. Caches the pre-edit value so an
    /// escape can restore it.
    pub fn begin_edit(&mut self) {
        if self.disabled {
            return;
        }
        self.edit_cache = Some(self.value.clone());
        self.editing = true;
    }

    /// Edit session ended by blur or an accept key.
    pub async fn commit_edit(&mut self) {
        self.editing = false;
        self.revalidate().await;
    }

    /// Edit session ended by an escape key: restore the pre-edit value.
    pub async fn revert_edit(&mut self) {
        if let Some(cached) = self.edit_cache.clone() {
            self.value = cached;
        }
        self.editing = false;
        self.revalidate().await;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub const fn verdict(&self) -> SlugVerdict {
        self.verdict
    }

    pub const fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }

    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    async fn resolve_source(&self) -> Option<String> {
        let locator = self.locator.as_ref()?;
        self.resolver
            .resolve(locator, self.source_collection.as_ref(), &self.context)
            .await
    }

    async fn revalidate(&mut self) {
        let verdict = self
            .validator
            .validate(&self.value, &self.options, &self.context)
            .await;
        self.verdict = verdict;

        match verdict {
            SlugVerdict::Valid => self.emitter.emit_validity(true, None),
            SlugVerdict::Invalid(violation) => self
                .emitter
                .emit_validity(false, Some(self.options.violation_message(violation))),
        }

        let blocked = !verdict.is_valid();
        if blocked != self.blocking {
            self.blocking = blocked;
            self.emitter.emit_blocking(blocked);
        }
    }

    fn derive(&self, text: &str) -> String {
        slugify(text, self.options.separator, self.options.lowercase)
    }

    /// Whether the user has ever opened a manual edit on a non-empty
    /// value; typed input stops being auto-derived from then on.
    fn manual_edit_started(&self) -> bool {
        self.edit_cache
            .as_deref()
            .is_some_and(|cached| !cached.is_empty())
    }
}
