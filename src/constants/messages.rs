//! User-facing messages. The classroom deployment is Brazilian Portuguese.

pub const MISSING_SUBMISSION_FIELDS: &str = "Campos 'level' e 'prompt' são obrigatórios.";
pub const PROMPT_TOO_LONG: &str = "Descrição muito longa!";
pub const INVALID_LEVEL: &str = "Nível inválido. Use 'A', 'B' ou 'C'.";
pub const INVALID_REQUEST_BODY: &str = "Corpo da requisição ausente ou em formato inválido.";

pub const GENERATION_FAILED: &str = "Não foi possível gerar um código válido a partir da descrição fornecida. Tente novamente ou avise o professor.";
pub const INCOHERENT_RESULT: &str = "A resposta gerada não parece representar um código coerente para a aplicação solicitada. Tente reformular sua descrição ou avise o professor.";

pub const INVALID_SUBMISSION_ID: &str = "ID de submissão inválido.";
pub const MISSING_MATCH: &str =
    "Campo 'match' é obrigatório (por exemplo: 'sim', 'parcial' ou 'nao').";
pub const INVALID_MATCH: &str = "Valor de 'match' inválido. Use 'sim', 'parcial' ou 'nao'.";
pub const FEEDBACK_SUBMISSION_NOT_FOUND: &str =
    "Submissão não encontrada para registrar feedback.";
pub const SUBMISSION_NOT_FOUND: &str = "Submissão não encontrada.";

pub const UNAUTHORIZED: &str = "Acesso não autorizado.";
pub const INTERNAL_ERROR: &str = "Ocorreu um erro interno. Tente novamente mais tarde ou avise o professor.";
