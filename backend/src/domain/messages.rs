//! User-facing (pt-BR) strings for form actions and field rules.

/// Messages reported by one form action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionMessages {
    /// Reported when upstream accepted the call.
    pub success: &'static str,
    /// Fallback when upstream rejected the call without a usable message.
    pub rejected: &'static str,
    /// Reported when upstream could not be reached or answered nonsense.
    pub failed: &'static str,
}

pub const SIGN_IN: ActionMessages = ActionMessages {
    success: "Login realizado com sucesso!",
    rejected: "Erro ao entrar. Por favor, tente novamente.",
    failed: "Falha ao entrar. Por favor, tente novamente.",
};

pub const SIGN_UP: ActionMessages = ActionMessages {
    success: "Cadastro realizado com sucesso!",
    rejected: "Erro ao cadastrar. Por favor, tente novamente.",
    failed: "Falha ao entrar. Por favor, tente novamente.",
};

pub const CREATE_TRIP: ActionMessages = ActionMessages {
    success: "Viagem criada com sucesso!",
    rejected: "Erro ao criar a viagem. Por favor, tente novamente.",
    failed: "Falha ao criar a viagem. Por favor, tente novamente.",
};

pub const REMOVE_TRIP: ActionMessages = ActionMessages {
    success: "Viagem removida com sucesso!",
    rejected: "Erro ao remover a viagem. Por favor, tente novamente.",
    failed: "Falha ao remover a viagem. Por favor, tente novamente.",
};

pub const ADD_MEMBER: ActionMessages = ActionMessages {
    success: "Membro adicionado com sucesso!",
    rejected: "Erro ao adicionar o membro. Por favor, tente novamente.",
    failed: "Falha ao adicionar o membro. Por favor, tente novamente.",
};

pub const INVITE_MEMBERS: ActionMessages = ActionMessages {
    success: "Convites enviados com sucesso!",
    rejected: "Erro ao enviar os convites. Por favor, tente novamente.",
    failed: "Falha ao enviar os convites. Por favor, tente novamente.",
};

pub const REMOVE_MEMBER: ActionMessages = ActionMessages {
    success: "Membro removido com sucesso!",
    rejected: "Erro ao remover o membro. Por favor, tente novamente.",
    failed: "Falha ao remover o membro. Por favor, tente novamente.",
};

pub const CREATE_ACTIVITY: ActionMessages = ActionMessages {
    success: "Atividade criada com sucesso!",
    rejected: "Erro ao criar a atividade. Por favor, tente novamente.",
    failed: "Falha ao criar a atividade. Por favor, tente novamente.",
};

pub const ACCEPT_INVITE: ActionMessages = ActionMessages {
    success: "Convite aceito com sucesso!",
    rejected: "Erro ao aceitar o convite. Por favor, tente novamente.",
    failed: "Falha ao aceitar o convite. Por favor, tente novamente.",
};

pub const UPDATE_PROFILE: ActionMessages = ActionMessages {
    success: "Atualização realizada com sucesso!",
    rejected: "Erro ao atualizar o perfil. Por favor, tente novamente.",
    failed: "Falha ao atualizar o perfil. Por favor, tente novamente.",
};

pub const SIGN_OUT_SUCCESS: &str = "Sessão encerrada.";
pub const TOKEN_MISSING: &str = "Token de acesso não encontrado.";
pub const TOKEN_EXPIRED: &str = "Token de acesso expirado.";
pub const NOT_SIGNED_IN: &str = "Usuário não autenticado.";
pub const INVALID_FORM: &str = "Verifique os campos do formulário.";
pub const TRIP_NOT_FOUND: &str = "Viagem não encontrada.";
pub const TRIPS_UNAVAILABLE: &str = "Não foi possível carregar as viagens.";

/// Field rule messages.
pub mod field {
    pub const EMAIL_INVALID: &str = "Email invalido";
    pub const MEMBER_EMAIL_INVALID: &str = "Email inválido";
    pub const EMAIL_REQUIRED: &str = "Email é obrigatório";
    pub const PASSWORD_TOO_SHORT: &str = "A senha deve ter pelo menos 6 caracteres";
    pub const PASSWORDS_DIFFER: &str = "As senhas não conferem";
    pub const NAME_REQUIRED: &str = "Nome é obrigatório";
    pub const TRIP_TITLE_REQUIRED: &str = "Nome da viagem é obrigatório";
    pub const DESTINATION_REQUIRED: &str = "Destino é obrigatório";
    pub const START_DATE_REQUIRED: &str = "Data de início é obrigatória";
    pub const END_DATE_REQUIRED: &str = "Data de fim é obrigatória";
    pub const TRIP_ID_REQUIRED: &str = "ID da viagem é obrigatório";
    pub const MEMBER_ID_REQUIRED: &str = "ID do membro é obrigatório";
    pub const ACTIVITY_NAME_REQUIRED: &str = "Nome da atividade é obrigatório";
    pub const COST_NOT_POSITIVE: &str = "Custo deve ser um número positivo";
    pub const COST_NOT_NUMBER: &str = "Custo deve ser um número";
    pub const REQUIRED: &str = "Campo obrigatório";
}

/// Description sent when a new trip leaves it blank.
pub const DEFAULT_TRIP_DESCRIPTION: &str = "Teste de descrição";
