use folio_core::entities::{MenuLocation, MenuTarget};
use folio_core::meta::{MenuMeta, parse_page_ref};
use folio_db::repos::NewMenuItem;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MenuCommands;
use crate::commands::shared::lookup::article_by_ref;
use crate::commands::shared::parse::parse_actor;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio menu`.
pub async fn handle(action: &MenuCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        MenuCommands::Create { name, default } => {
            let menu = ctx.service.create_menu(name).await?;
            if *default {
                ctx.service
                    .set_menu_location(MenuLocation::DEFAULT, &menu.id)
                    .await?;
            }
            output(&json!({ "menu": menu, "default": default }), flags.format)
        }
        MenuCommands::AddItem {
            menu,
            title,
            article,
            url,
            parent,
            position,
            attr_title,
            target,
            rel,
            class,
        } => {
            let item_target = match (article, url) {
                (Some(reference), _) => MenuTarget::Article {
                    article_id: article_by_ref(ctx, reference).await?.id,
                },
                (None, Some(url)) => MenuTarget::Url { url: url.clone() },
                (None, None) => MenuTarget::Placeholder,
            };
            let mut item = NewMenuItem::new(menu.as_str(), title.clone().unwrap_or_default(), item_target);
            item.parent_item_id.clone_from(parent);
            item.position = *position;
            item.attr_title.clone_from(attr_title);
            item.link_target.clone_from(target);
            item.rel.clone_from(rel);
            item.css_class.clone_from(class);

            let item = ctx.service.add_menu_item(item).await?;
            output(&item, flags.format)
        }
        MenuCommands::List => {
            let menus = ctx.service.list_menus().await?;
            let default = ctx.service.menu_at_location(MenuLocation::DEFAULT).await?;
            output(&json!({ "menus": menus, "default": default }), flags.format)
        }
        MenuCommands::SetDefault { menu } => {
            match menu {
                Some(menu_id) => {
                    ctx.service
                        .set_menu_location(MenuLocation::DEFAULT, menu_id)
                        .await?;
                }
                None => ctx.service.clear_menu_location(MenuLocation::DEFAULT).await?,
            }
            output(
                &json!({ "location": MenuLocation::DEFAULT, "menu_id": menu }),
                flags.format,
            )
        }
        MenuCommands::SetParentPage { id, page, role } => {
            let actor = parse_actor(role.as_deref())?;
            let meta = MenuMeta {
                parent_page: Some(page.as_deref().and_then(parse_page_ref)),
            };
            let outcome = ctx.service.write_menu_meta(&actor, id, meta).await?;
            let menu = ctx.service.get_menu(id).await?;
            output(&json!({ "menu": menu, "outcome": outcome }), flags.format)
        }
    }
}
