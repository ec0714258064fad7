use super::{AmdInfo, AmdOrderer, TypeConversionWarning};
use crate::io::ConfigurablePrintTarget;
use crate::timers::Timers;
use std::io::Write;

impl ConfigurablePrintTarget for AmdOrderer {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

impl AmdOrderer {
    pub(crate) fn print_configuration(&mut self, n: usize, nz: usize) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }
        let settings = &self.settings;
        let out = &mut self.stream;

        writeln!(
            out,
            "\namdorder v{}: approximate minimum degree ordering",
            crate::VERSION
        )?;
        if settings.dense < 0.0 {
            writeln!(out, "  dense rows        : only nearly full rows")?;
        } else {
            writeln!(out, "  dense row param   : {}", settings.dense)?;
            writeln!(
                out,
                "  (rows with more than max({} * sqrt(n), 16) entries are\n   considered \"dense\", and placed last in the ordering)",
                settings.dense
            )?;
        }
        writeln!(
            out,
            "  aggressive absorb : {}",
            if settings.aggressive { "yes" } else { "no" }
        )?;
        writeln!(out, "\nproblem:")?;
        writeln!(out, "  n                 = {}", n)?;
        writeln!(out, "  nnz(A)            = {}", nz)?;
        Ok(())
    }

    pub(crate) fn print_warnings(
        &mut self,
        warnings: &[TypeConversionWarning],
    ) -> std::io::Result<()> {
        if !self.settings.verbose || warnings.is_empty() {
            return Ok(());
        }
        let out = &mut self.stream;
        writeln!(out, "\nwarning: {} non-numeric entries", warnings.len())?;
        for w in warnings {
            writeln!(out, "  {}", w)?;
        }
        Ok(())
    }

    pub(crate) fn print_info(&mut self, info: &AmdInfo, timers: &Timers) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }
        let out = &mut self.stream;

        writeln!(out, "\nresults:")?;
        writeln!(out, "  status                          : {}", info.status)?;
        writeln!(out, "  n, dimension of A               : {}", info.n)?;
        writeln!(out, "  nz, number of nonzeros in A     : {}", info.nz)?;
        writeln!(out, "  symmetry of A                   : {:.4}", info.symmetry)?;
        writeln!(out, "  number of nonzeros on diagonal  : {}", info.nzdiag)?;
        writeln!(out, "  nonzeros in pattern of A+A'     : {}", info.nz_a_plus_at)?;
        writeln!(out, "  # dense rows/columns of A+A'    : {}", info.ndense)?;
        writeln!(out, "  memory used, in bytes           : {}", info.memory)?;
        writeln!(out, "  supervariables merged           : {}", info.nsupervariables)?;
        writeln!(out, "  mass eliminations               : {}", info.nmass_eliminated)?;
        writeln!(
            out,
            "  elements created / absorbed     : {} / {} ({} aggressive)",
            info.nelements, info.nabsorbed, info.naggressive
        )?;

        writeln!(out, "\n  estimates for a Cholesky or LU factorization:")?;
        writeln!(out, "  nonzeros in L (excl. diagonal)  : {:.0}", info.lnz)?;
        writeln!(out, "  nonzeros in L (incl. diagonal)  : {:.0}", info.lnz + info.n as f64)?;
        writeln!(out, "  # divide operations             : {:.0}", info.ndiv)?;
        writeln!(out, "  # multiply-subtract, LDL'       : {:.0}", info.nmultsubs_ldl)?;
        writeln!(out, "  # multiply-subtract, LU         : {:.0}", info.nmultsubs_lu)?;
        writeln!(out, "  max nonzeros in any column of L : {:.0}", info.dmax)?;

        writeln!(out, "\ntiming:")?;
        timers.print(out)?;
        writeln!(
            out,
            "  total : {:?} (ordering {:?})",
            timers.total_time(),
            timers.elapsed("order")
        )?;
        Ok(())
    }
}
