use crate::components::icons::Icon;

pub const BADGE: &str = "Protocolo V.25 Ativo";
pub const HEADLINE: &str = "A Nova Era do";
pub const HEADLINE_HIGHLIGHT: &str = "Sucesso Digital";
pub const HERO_SUBTITLE: &str = "Supere a concorrência com uma estrutura futurista de alta performance. Desenvolvido para quem busca supremacia absoluta.";

/// Times the product tag repeats on each ribbon band.
pub const RIBBON_REPEAT: usize = 8;

pub const QUESTIONS: [&str; 4] = [
    "Sente que está trabalhando muito, mas os resultados ainda não condizem com seu esforço?",
    "Já tentou diversos métodos que prometiam resultados rápidos e acabou se frustrando?",
    "Fica paralisado com o excesso de informações e não sabe o próximo passo?",
    "Gostaria de ter mais liberdade, mas não sabe como automatizar seus processos?",
];

pub const BENEFITS: [&str; 4] = [
    "Automatizar 100% dos seus processos repetitivos",
    "Escalar sua operação sem aumentar custos operacionais",
    "Ter controle total sobre suas métricas em tempo real",
    "Dominar ferramentas de elite ignoradas pela concorrência",
];

pub struct Step {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const STEPS: [Step; 3] = [
    Step {
        label: "Alpha",
        title: "Core Strategy",
        description: "Arquitetura baseada em dados e inteligência de mercado para máxima conversão.",
        icon: Icon::BookOpen,
    },
    Step {
        label: "Beta",
        title: "Execution Engine",
        description: "Implementação automatizada que reduz o erro humano a zero e acelera o tempo de resposta.",
        icon: Icon::Zap,
    },
    Step {
        label: "Omega",
        title: "Hyper Scaling",
        description: "Protocolos de expansão exponencial para dominar seu setor com consistência.",
        icon: Icon::Globe,
    },
];

pub struct ModuleCard {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const MODULES: [ModuleCard; 3] = [
    ModuleCard {
        label: "Phase 01",
        title: "Fundamentos Base",
        description: "O alicerce tecnológico e estratégico para sua operação.",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?q=80&w=500&auto=format&fit=crop",
    },
    ModuleCard {
        label: "Phase 02",
        title: "Engine de Performance",
        description: "Sistemas de automação e workflows de alto rendimento.",
        image: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?q=80&w=500&auto=format&fit=crop",
    },
    ModuleCard {
        label: "Phase 03",
        title: "Master Protocol",
        description: "Estratégias avançadas de liderança e escala de mercado.",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=500&auto=format&fit=crop",
    },
];

pub const BUNDLE: [&str; 6] = [
    "Core Framework (Módulos 1-3)",
    "Atualizações Vitalícias",
    "Templates de Infraestrutura Cloud",
    "Canal de Suporte Prioritário",
    "Acesso à Comunidade Alpha",
    "Escudo de Garantia de 7 Dias",
];

pub struct Price {
    pub previous: &'static str,
    pub current: &'static str,
    pub installments: &'static str,
}

pub const PRICE: Price = Price {
    previous: "Paradigma Antigo: R$ 997,00",
    current: "R$ 297",
    installments: "ou 12x de R$ 29,70",
};

pub const GUARANTEE_DAYS: u32 = 7;
pub const GUARANTEE_TEXT: &str = "Eu retiro todo o peso das suas costas. Você tem 7 dias para testar todo o sistema. Se você não sentir que os resultados valem 10x o valor investido, devolvemos cada centavo sem perguntas.";
pub const TRUST_BULLETS: [&str; 2] = ["Reembolso 100% Digital", "Segurança Bancária SSL"];

pub const FAQS: [(&str, &str); 4] = [
    ("Acesso Imediato?", "Login enviado em milissegundos após confirmação de pagamento via e-mail e WhatsApp."),
    ("Hardware Necessário?", "Totalmente baseado em nuvem. Funciona em qualquer navegador moderno, seja desktop ou mobile."),
    ("Suporte Técnico?", "Time de especialistas disponível via Discord e E-mail em horário comercial para sanar qualquer dúvida técnica."),
    ("Updates Futuros?", "Protocolo vitalício com todas as novas tecnologias e patches inclusos sem custo adicional."),
];

pub const COMPANY: &str = "Digital Supremacy Protocols";

/// Flips one answer of the self-assessment; out-of-range indices change nothing.
pub fn toggle_check<const N: usize>(checklist: [bool; N], index: usize) -> [bool; N] {
    let mut next = checklist;
    if let Some(entry) = next.get_mut(index) {
        *entry = !*entry;
    }
    next
}

pub fn copyright(year: i32) -> String {
    format!("© {} {}. Todos os direitos reservados.", year, COMPANY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_only_that_entry() {
        let checklist = [false; 4];
        let once = toggle_check(checklist, 2);
        assert_eq!(once, [false, false, true, false]);
        let twice = toggle_check(once, 2);
        assert_eq!(twice, checklist);
        assert_eq!(toggle_check(once, 0), [true, false, true, false]);
    }

    #[test]
    fn toggling_out_of_range_is_a_no_op() {
        assert_eq!(toggle_check([true, false], 5), [true, false]);
    }

    #[test]
    fn one_checkbox_per_question() {
        assert_eq!(QUESTIONS.len(), 4);
        assert_eq!(toggle_check([false; QUESTIONS.len()], 3).len(), QUESTIONS.len());
    }

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2025), "© 2025 Digital Supremacy Protocols. Todos os direitos reservados.");
    }
}
