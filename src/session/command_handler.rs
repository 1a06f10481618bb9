// Slash-command dispatch for the interactive session.

use crate::model::StoreTab;
use crate::session::StoreSession;
use crate::view::ViewAction;

use tracing::info;

/// Handles one input line. Returns `false` when the session should end.
pub async fn handle_command(line: &str, session: &mut StoreSession) -> bool {
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    info!("Handling command: {}", command);

    match command {
        "/help" => {
            let help_msg = "📋 Comandos disponibles:\n\
                /inicio — portada de la tienda\n\
                /juegos — pestaña de juegos unitarios\n\
                /packs — pestaña de packs\n\
                /buscar <texto> — buscar (sin texto limpia la búsqueda)\n\
                /ofertas — alternar el filtro de ofertas\n\
                /mas — mostrar más resultados\n\
                /comprar <n> — pedir el ítem n por WhatsApp\n\
                /estado — estado de los feeds\n\
                /refresh — recargar el catálogo\n\
                /salir — terminar";
            println!("{help_msg}");
        }
        "/salir" | "/exit" => return false,
        "/inicio" => session.render_home(),
        "/juegos" => {
            let len = session.filtered_len();
            session.view.apply(ViewAction::SwitchTab(StoreTab::Units), len);
            session.render_page();
        }
        "/packs" => {
            let len = session.filtered_len();
            session.view.apply(ViewAction::SwitchTab(StoreTab::Packs), len);
            session.render_page();
        }
        "/buscar" => {
            let len = session.filtered_len();
            session.view.apply(ViewAction::Type(argument.to_string()), len);
            if !argument.is_empty() {
                session.view.apply(ViewAction::Submit, len);
            }
            session.render_page();
        }
        "/ofertas" => {
            let len = session.filtered_len();
            session.view.apply(ViewAction::ToggleOffersOnly, len);
            if session.view.active_tab == StoreTab::Packs {
                println!("ℹ️ El filtro de ofertas aplica solo a juegos unitarios.");
            }
            session.render_page();
        }
        "/mas" => {
            let len = session.filtered_len();
            session.view.apply(ViewAction::ShowMore, len);
            session.render_page();
        }
        "/comprar" => match argument.parse::<usize>() {
            Ok(position) => session.buy(position),
            Err(_) => println!("🤖 Uso: /comprar N (número del listado visible)"),
        },
        "/estado" => session.render_status(),
        "/refresh" => {
            println!("🔄 Actualizando catálogo...");
            session.refresh().await;
            session.render_home();
        }
        _ => println!("🤖 Comando desconocido. Escribe /help para la lista."),
    }

    true
}
