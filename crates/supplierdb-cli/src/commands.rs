//! Command handlers. Each one builds a [`SupplierPage`], drives it through the
//! same steps the page UI takes, and reports through the terminal sink.

use std::time::Duration;

use anyhow::Context as _;
use supplierdb_client::SupplierClient;
use supplierdb_core::{
    AppConfig, ConfirmPrompt, DeleteOutcome, PhoneFormatter, PhoneListError, RecordSubmitter,
    SupplierForm, SupplierPage,
};

use crate::terminal::{self, AssumeYes, StdinPrompt, TerminalSink};

pub(crate) struct Context {
    submitter: RecordSubmitter<SupplierClient>,
    formatter: PhoneFormatter,
    sink: TerminalSink,
}

impl Context {
    pub(crate) fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let client = SupplierClient::new(
            &config.api_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
        .context("failed to build record API client")?;
        Ok(Self {
            submitter: RecordSubmitter::new(
                client,
                config.phone_wire_format,
                Duration::from_secs(config.request_timeout_secs),
            ),
            formatter: PhoneFormatter::new(config.phone_fallback),
            sink: TerminalSink,
        })
    }

    fn api(&self) -> &SupplierClient {
        self.submitter.api()
    }

    async fn load_page(&self) -> anyhow::Result<SupplierPage> {
        let mut page = SupplierPage::new();
        if !page.refresh(self.api(), &self.sink).await {
            anyhow::bail!("could not load suppliers from the record API");
        }
        Ok(page)
    }
}

/// Field values typed on the command line. `None` leaves the form field as
/// it is; an empty `phones` keeps the current phone list.
#[derive(Debug, Default)]
pub(crate) struct FormEdits {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phones: Vec<String>,
    pub supplier_type: Option<String>,
    pub note: Option<String>,
}

impl FormEdits {
    /// Applies the edits the way a user would fill the modal: one phone slot
    /// per value, appending slots as needed.
    pub(crate) fn apply(self, form: &mut SupplierForm) -> anyhow::Result<()> {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(email) = self.email {
            form.email = email;
        }
        if !self.phones.is_empty() {
            fill_phones(form, &self.phones)?;
        }
        if let Some(raw) = self.supplier_type {
            form.select_supplier_type(&raw)?;
        }
        if let Some(note) = self.note {
            form.note = note;
        }
        Ok(())
    }
}

fn fill_phones(form: &mut SupplierForm, phones: &[String]) -> Result<(), PhoneListError> {
    form.replace_phones(std::iter::empty::<String>());
    for (index, phone) in phones.iter().enumerate() {
        if index > 0 {
            form.add_phone();
        }
        form.set_phone(index, phone.as_str())?;
    }
    Ok(())
}

pub(crate) async fn run_list(ctx: &Context) -> anyhow::Result<()> {
    let page = ctx.load_page().await?;
    if page.records().is_empty() {
        println!("no suppliers registered yet; use `create` to add one");
        return Ok(());
    }
    print!("{}", terminal::render_table(page.records(), &ctx.formatter));
    Ok(())
}

pub(crate) async fn run_show(ctx: &Context, id: &str) -> anyhow::Result<()> {
    let page = ctx.load_page().await?;
    let record = page
        .record(id)
        .ok_or_else(|| anyhow::anyhow!("supplier '{id}' not found"))?;
    print!("{}", terminal::render_record(record, &ctx.formatter));
    Ok(())
}

pub(crate) async fn run_create(ctx: Context, edits: FormEdits) -> anyhow::Result<()> {
    let mut page = SupplierPage::new();
    page.open_create();
    edits.apply(page.form_mut())?;

    let outcome = page.submit(&ctx.submitter, &ctx.sink).await?;
    print!(
        "{}",
        terminal::render_record(outcome.record(), &ctx.formatter)
    );
    Ok(())
}

pub(crate) async fn run_update(ctx: Context, id: &str, edits: FormEdits) -> anyhow::Result<()> {
    let mut page = ctx.load_page().await?;
    page.toggle_selection(id);
    page.open_edit()
        .with_context(|| format!("cannot edit supplier '{id}'"))?;
    edits.apply(page.form_mut())?;

    let outcome = page.submit(&ctx.submitter, &ctx.sink).await?;
    print!(
        "{}",
        terminal::render_record(outcome.record(), &ctx.formatter)
    );
    Ok(())
}

pub(crate) async fn run_delete(ctx: &Context, id: &str, assume_yes: bool) -> anyhow::Result<()> {
    let prompt: &dyn ConfirmPrompt = if assume_yes { &AssumeYes } else { &StdinPrompt };
    let mut page = SupplierPage::new();

    match page.delete(id, ctx.api(), prompt, &ctx.sink).await? {
        DeleteOutcome::Deleted => Ok(()),
        DeleteOutcome::Declined => {
            println!("delete aborted");
            Ok(())
        }
        DeleteOutcome::Failed => anyhow::bail!("supplier '{id}' was not deleted"),
    }
}
