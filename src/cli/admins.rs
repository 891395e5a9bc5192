//! Platform administrator account commands.

use std::sync::Arc;

use clap::Subcommand;

use studyhall_client::{ApiClient, ListController, MutationGuard};
use studyhall_core::ApiError;
use studyhall_models::{AdminFilter, AdminId, AdminUser, CreateAdminDto};

use super::PageArgs;
use super::courses::{confirm_destructive, prompt_if_missing};

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List administrator accounts
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Create a new administrator account
    Create {
        /// First name (prompted if not provided)
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Role name
        #[arg(short = 'r', long, default_value = "content_manager")]
        role: String,
    },
    /// Delete an administrator account
    Delete {
        /// Id of the account to delete
        id: AdminId,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

pub async fn run(client: Arc<ApiClient>, command: AdminCommand) -> Result<(), ApiError> {
    match command {
        AdminCommand::List { page } => {
            let list = ListController::<AdminUser>::new(client, page.page_size);
            list.set_filters(AdminFilter { search: page.search }).await?;
            if page.page > 1 {
                list.set_page(page.page).await?;
            }

            let snapshot = list.snapshot();
            println!(
                "👤 Administrators (page {}/{}, {} total)",
                snapshot.page,
                snapshot.total_pages.max(1),
                snapshot.total
            );
            for admin in &snapshot.items {
                let active = if admin.is_active { "active" } else { "inactive" };
                println!(
                    "   {}  {:<30} {:<30} [{}] ({})",
                    admin.id,
                    admin.full_name(),
                    admin.email,
                    admin.role,
                    active
                );
            }
            Ok(())
        }
        AdminCommand::Create {
            first_name,
            last_name,
            email,
            role,
        } => {
            let guard = admin_guard(client);
            let dto = CreateAdminDto {
                first_name: prompt_if_missing(first_name, "First name")?,
                last_name: prompt_if_missing(last_name, "Last name")?,
                email: prompt_if_missing(email, "Email address")?,
                role,
            };
            let created = guard.create(&dto).await?;
            println!(
                "✅ Created administrator {} <{}> ({})",
                created.full_name(),
                created.email,
                created.id
            );
            Ok(())
        }
        AdminCommand::Delete { id, yes } => {
            if !yes && !confirm_destructive(&format!("Delete administrator {id}?"))? {
                println!("Aborted.");
                return Ok(());
            }
            let guard = admin_guard(client);
            guard.delete(id).await?;
            println!("✅ Deleted administrator {id}");
            Ok(())
        }
    }
}

fn admin_guard(client: Arc<ApiClient>) -> MutationGuard<AdminUser> {
    let list = ListController::<AdminUser>::new(client.clone(), 10);
    MutationGuard::new(client, list)
}
