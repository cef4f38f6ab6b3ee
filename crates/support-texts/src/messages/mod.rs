//! The "text messages" group: everything the bot says to users and admins.
//!
//! Templates are Telegram HTML. `{name}`-style tokens are filled in by
//! [`crate::Text::render`].

use crate::table::{Entries, TextTable};

/// Message keys of [`TEXT_MESSAGES`].
pub mod keys {
    pub const SELECT_LANGUAGE: &str = "select_language";
    pub const CHANGE_LANGUAGE: &str = "change_language";
    pub const MAIN_MENU: &str = "main_menu";
    pub const MESSAGE_SENT: &str = "message_sent";
    pub const MESSAGE_EDITED: &str = "message_edited";
    pub const SOURCE: &str = "source";
    pub const USER_STARTED_BOT: &str = "user_started_bot";
    pub const USER_RESTARTED_BOT: &str = "user_restarted_bot";
    pub const USER_STOPPED_BOT: &str = "user_stopped_bot";
    pub const USER_BLOCKED: &str = "user_blocked";
    pub const USER_UNBLOCKED: &str = "user_unblocked";
    pub const BLOCKED_BY_USER: &str = "blocked_by_user";
    pub const USER_INFORMATION: &str = "user_information";
    pub const MESSAGE_NOT_SENT: &str = "message_not_sent";
    pub const MESSAGE_SENT_TO_USER: &str = "message_sent_to_user";
    pub const SILENT_MODE_ENABLED: &str = "silent_mode_enabled";
    pub const SILENT_MODE_DISABLED: &str = "silent_mode_disabled";

    /// Every key, in table order.
    pub const ALL: &[&str] = &[
        SELECT_LANGUAGE,
        CHANGE_LANGUAGE,
        MAIN_MENU,
        MESSAGE_SENT,
        MESSAGE_EDITED,
        SOURCE,
        USER_STARTED_BOT,
        USER_RESTARTED_BOT,
        USER_STOPPED_BOT,
        USER_BLOCKED,
        USER_UNBLOCKED,
        BLOCKED_BY_USER,
        USER_INFORMATION,
        MESSAGE_NOT_SENT,
        MESSAGE_SENT_TO_USER,
        SILENT_MODE_ENABLED,
        SILENT_MODE_DISABLED,
    ];
}

pub static TEXT_MESSAGES: TextTable = TextTable::new("messages", &[("en", EN), ("br", BR)]);

const EN: Entries = &[
    (
        keys::SELECT_LANGUAGE,
        "👋 <b>Hello</b>, {full_name}!\n\nSelect language:",
    ),
    (keys::CHANGE_LANGUAGE, "<b>Select language:</b>"),
    (
        keys::MAIN_MENU,
        "<b>Write your question</b>, and we will answer you as soon as possible:",
    ),
    (keys::MESSAGE_SENT, "<b>Message sent!</b> Expect a response."),
    (
        keys::MESSAGE_EDITED,
        concat!(
            "<b>The message was edited only in your chat.</b> ",
            "To send an edited message, send it as a new message.",
        ),
    ),
    (
        keys::SOURCE,
        concat!(
            "Source code available at ",
            "<a href=\"https://github.com/nessshon/support-bot\">GitHub</a>",
        ),
    ),
    (
        keys::USER_STARTED_BOT,
        concat!(
            "<b>User {name} started the bot!</b>\n\n",
            "List of available commands:\n\n",
            "• /ban\n",
            "Block/Unblock user",
            "<blockquote>Block the user if you do not want to receive messages from him.</blockquote>\n\n",
            "• /silent\n",
            "Activate/Deactivate silent mode",
            "<blockquote>When silent mode is enabled, messages are not sent to the user.</blockquote>\n\n",
            "• /information\n",
            "User information",
            "<blockquote>Receive a message with basic information about the user.</blockquote>",
        ),
    ),
    (
        keys::USER_RESTARTED_BOT,
        "<b>User {name} restarted the bot!</b>",
    ),
    (keys::USER_STOPPED_BOT, "<b>User {name} stopped the bot!</b>"),
    (
        keys::USER_BLOCKED,
        "<b>User blocked!</b> Messages from the user are not accepted.",
    ),
    (
        keys::USER_UNBLOCKED,
        "<b>User unblocked!</b> Messages from the user are being accepted again.",
    ),
    (
        keys::BLOCKED_BY_USER,
        "<b>Message not sent!</b> The bot has been blocked by the user.",
    ),
    (
        keys::USER_INFORMATION,
        concat!(
            "<b>ID:</b>\n",
            "- <code>{id}</code>\n",
            "<b>Name:</b>\n",
            "- {full_name}\n",
            "<b>Status:</b>\n",
            "- {state}\n",
            "<b>Username:</b>\n",
            "- {username}\n",
            "<b>Blocked:</b>\n",
            "- {is_banned}\n",
            "<b>Registration date:</b>\n",
            "- {created_at}",
        ),
    ),
    (
        keys::MESSAGE_NOT_SENT,
        "<b>Message not sent!</b> An unexpected error occurred.",
    ),
    (keys::MESSAGE_SENT_TO_USER, "<b>Message sent to user!</b>"),
    (
        keys::SILENT_MODE_ENABLED,
        "<b>Silent mode activated!</b> Messages will not be delivered to the user.",
    ),
    (
        keys::SILENT_MODE_DISABLED,
        "<b>Silent mode deactivated!</b> The user will receive all messages.",
    ),
];

const BR: Entries = &[
    (
        keys::SELECT_LANGUAGE,
        "👋 <b>Olá</b>, {full_name}!\n\nSelecione o idioma:",
    ),
    (keys::CHANGE_LANGUAGE, "<b>Selecione o idioma:</b>"),
    (
        keys::MAIN_MENU,
        "<b>Escreva sua pergunta</b> e responderemos o mais rápido possível:",
    ),
    (
        keys::MESSAGE_SENT,
        "<b>Mensagem enviada!</b> Aguarde uma resposta.",
    ),
    (
        keys::MESSAGE_EDITED,
        concat!(
            "<b>A mensagem foi editada apenas no seu chat.</b> ",
            "Para enviar uma mensagem editada, envie-a como uma nova mensagem.",
        ),
    ),
    (
        keys::SOURCE,
        concat!(
            "Código-fonte disponível em ",
            "<a href=\"https://github.com/nessshon/support-bot\">GitHub</a>",
        ),
    ),
    (
        keys::USER_STARTED_BOT,
        concat!(
            "<b>O usuário {name} iniciou o bot!</b>\n\n",
            "Lista de comandos disponíveis:\n\n",
            "• /ban\n",
            "Bloquear/Desbloquear usuário",
            "<blockquote>Bloqueie o usuário se não quiser receber mensagens dele.</blockquote>\n\n",
            "• /silent\n",
            "Ativar/Desativar modo silencioso",
            "<blockquote>Quando o modo silencioso está ativado, as mensagens não são enviadas para o usuário.</blockquote>\n\n",
            "• /information\n",
            "Informações do usuário",
            "<blockquote>Receba uma mensagem com informações básicas sobre o usuário.</blockquote>",
        ),
    ),
    (
        keys::USER_RESTARTED_BOT,
        "<b>O usuário {name} reiniciou o bot!</b>",
    ),
    (
        keys::USER_STOPPED_BOT,
        "<b>O usuário {name} parou o bot!</b>",
    ),
    (
        keys::USER_BLOCKED,
        "<b>Usuário bloqueado!</b> Mensagens do usuário não são aceitas.",
    ),
    (
        keys::USER_UNBLOCKED,
        "<b>Usuário desbloqueado!</b> Mensagens do usuário estão sendo aceitas novamente.",
    ),
    (
        keys::BLOCKED_BY_USER,
        "<b>Mensagem não enviada!</b> O bot foi bloqueado pelo usuário.",
    ),
    (
        keys::USER_INFORMATION,
        concat!(
            "<b>ID:</b>\n",
            "- <code>{id}</code>\n",
            "<b>Nome:</b>\n",
            "- {full_name}\n",
            "<b>Status:</b>\n",
            "- {state}\n",
            "<b>Nome de usuário:</b>\n",
            "- {username}\n",
            "<b>Bloqueado:</b>\n",
            "- {is_banned}\n",
            "<b>Data de registro:</b>\n",
            "- {created_at}",
        ),
    ),
    (
        keys::MESSAGE_NOT_SENT,
        "<b>Mensagem não enviada!</b> Ocorreu um erro inesperado.",
    ),
    (
        keys::MESSAGE_SENT_TO_USER,
        "<b>Mensagem enviada para o usuário!</b>",
    ),
    (
        keys::SILENT_MODE_ENABLED,
        "<b>Modo silencioso ativado!</b> As mensagens não serão entregues ao usuário.",
    ),
    (
        keys::SILENT_MODE_DISABLED,
        "<b>Modo silencioso desativado!</b> O usuário receberá todas as mensagens.",
    ),
];

#[cfg(test)]
mod tests;
