//! Console emoter
//!
//! Protocolo de texto com o operador humano: um contrato de consentimento
//! antes da execução e um pedido de emoção, confirmado com Enter, a cada
//! instrução condicional.

use std::io::{self, BufRead, Write};

use cfl_core::{EmotionCue, Emoter};
use tracing::debug;

/// Contrato apresentado antes da execução
pub const CONSENT_NOTICE: &str = "\
[By running this program, you agree to act as the EMOTER.    ]
[The EMOTER may be asked to perform certain limited tasks    ]
[on behalf of this program, tasks that the system on which   ]
[this program is running may not be capable of.              ]
[In particular, you may be asked to express certain emotions.]
[Your experience of these emotions be genuine.               ]

[Do you agree to act as the EMOTER?                          ]
[If so, press the letter 'Y' on your keyboard, then Enter.   ] ";

pub const GOODBYE: &str = "[Goodbye.]";

/// Resposta ao contrato
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Granted,
    Declined,
}

/// Emoter que conversa por um par leitor/escritor de texto
pub struct ConsoleEmoter<R, W> {
    input: R,
    output: W,
    acknowledged: u64,
}

impl<R: BufRead, W: Write> ConsoleEmoter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            acknowledged: 0,
        }
    }

    /// Apresenta o contrato e lê a resposta
    ///
    /// Só o primeiro caractere da linha conta: `y` ou `Y` aceita. Fim da
    /// entrada equivale a recusa.
    pub fn obtain_consent(&mut self) -> io::Result<Consent> {
        self.output.write_all(CONSENT_NOTICE.as_bytes())?;
        self.output.flush()?;

        let line = self.read_line()?;
        match line.first() {
            Some(b'y' | b'Y') => Ok(Consent::Granted),
            _ => {
                writeln!(self.output, "{GOODBYE}")?;
                self.output.flush()?;
                Ok(Consent::Declined)
            }
        }
    }

    /// Confirmações recebidas até agora
    pub fn acknowledged(&self) -> u64 {
        self.acknowledged
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> io::Result<Vec<u8>> {
        let mut line = Vec::new();
        self.input.read_until(b'\n', &mut line)?;
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Emoter for ConsoleEmoter<R, W> {
    fn present(&mut self, cue: &EmotionCue) -> io::Result<()> {
        write!(
            self.output,
            "[EMOTER: please genuinely experience {} {} and press Enter] ",
            cue.intensity, cue.emotion
        )?;
        self.output.flush()?;

        let line = self.read_line()?;
        if line.last() != Some(&b'\n') {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "emoter input closed before acknowledgment",
            ));
        }
        self.acknowledged += 1;
        debug!(%cue, acknowledged = self.acknowledged, "emotion acknowledged");
        Ok(())
    }
}
