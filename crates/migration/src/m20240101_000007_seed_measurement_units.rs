//! Seed the measurement unit catalogue (SUNAT unit codes).
//!
//! `UNIDAD` (`NIU`) lands at id 54 and is the usual default for products.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

pub const UNITS: &[(&str, &str)] = &[
    ("BOBINAS", "4A"),
    ("BALDE", "BJ"),
    ("BARRILES", "BLL"),
    ("BOLSA", "BG"),
    ("BOTELLAS", "BO"),
    ("CAJA", "BX"),
    ("CARTONES", "CT"),
    ("CENTIMETRO CUADRADO", "CMK"),
    ("CENTIMETRO CUBICO", "CMQ"),
    ("CENTIMETRO LINEAL", "CMT"),
    ("CIENTO DE UNIDADES", "CEN"),
    ("CILINDRO", "CY"),
    ("CONOS", "CJ"),
    ("DOCENA", "DZN"),
    ("DOCENA POR 10**6", "DZP"),
    ("FARDO", "BE"),
    ("GALON INGLES (4,545956L)", "GLI"),
    ("GRAMO", "GRM"),
    ("GRUESA", "GRO"),
    ("HECTOLITRO", "HLT"),
    ("HOJA", "LEF"),
    ("JUEGO", "SET"),
    ("KILOGRAMO", "KGM"),
    ("KILOMETRO", "KTM"),
    ("KILOVATIO HORA", "KWH"),
    ("KIT", "KIT"),
    ("LATAS", "CA"),
    ("LIBRAS", "LBR"),
    ("LITRO", "LTR"),
    ("MEGAWATT HORA", "MWH"),
    ("METRO", "MTR"),
    ("METRO CUADRADO", "MTK"),
    ("METRO CUBICO", "MTQ"),
    ("MILIGRAMOS", "MGM"),
    ("MILILITRO", "MLT"),
    ("MILIMETRO", "MMT"),
    ("MILIMETRO CUADRADO", "MMK"),
    ("MILIMETRO CUBICO", "MMQ"),
    ("MILLARES", "MIL"),
    ("MILLON DE UNIDADES", "UM"),
    ("ONZAS", "ONZ"),
    ("PALETAS", "PF"),
    ("PAQUETE", "PK"),
    ("PAR", "PR"),
    ("PORCION", "PT"),
    ("RESMA", "RM"),
    ("ROLLO", "RO"),
    ("SACO", "SA"),
    ("SET", "ST"),
    ("TAMBOR", "TU"),
    ("TANQUE", "TK"),
    ("TONELADA", "TNE"),
    ("TUBOS", "TU"),
    ("UNIDAD", "NIU"),
    ("YARDA", "YRD"),
    ("GRAMO NETO", "GRN"),
    ("KILOGRAMO NETO", "KGN"),
    ("TONELADA LARGA", "LTON"),
    ("TONELADA CORTA", "STON"),
    ("PIES CUBICOS", "FTQ"),
    ("PIES CUADRADOS", "FTK"),
    ("PIE LINEAL", "FT"),
    ("MIL", "ML"),
    ("KILOMETRO POR HORA", "KMH"),
    ("MILLAS POR HORA", "MPH"),
    ("MILILITROS POR HORA", "MLH"),
    ("MILIGRAMOS POR HORA", "MGH"),
    ("MILIMETROS POR HORA", "MMH"),
    ("GRAMOS POR HORA", "GRH"),
    ("PIES POR HORA", "FTH"),
    ("CENTIMETROS POR HORA", "CMH"),
    ("METROS POR HORA", "MTH"),
    ("YARDAS POR HORA", "YDH"),
    ("MILILITROS POR MINUTO", "MLM"),
    ("MILIGRAMOS POR MINUTO", "MGM"),
    ("GRAMOS POR MINUTO", "GRM"),
    ("PIES POR MINUTO", "FTM"),
    ("CENTIMETROS POR MINUTO", "CMM"),
    ("METROS POR MINUTO", "MTM"),
    ("YARDAS POR MINUTO", "YDM"),
    ("MILILITROS POR SEGUNDO", "MLS"),
    ("MILIGRAMOS POR SEGUNDO", "MGS"),
    ("GRAMOS POR SEGUNDO", "GRS"),
    ("PIES POR SEGUNDO", "FTS"),
    ("CENTIMETROS POR SEGUNDO", "CMS"),
    ("METROS POR SEGUNDO", "MTS"),
    ("YARDAS POR SEGUNDO", "YDS"),
    ("TONELADA MÉTRICA", "T"),
    ("UNIDADES POR METRO", "UPM"),
    ("UNIDADES POR CENTÍMETRO", "UPC"),
    ("UNIDADES POR MILÍMETRO", "UPMM"),
    ("UNIDADES POR GRAMO", "UPG"),
    ("UNIDADES POR KILOGRAMO", "UPKG"),
    ("UNIDADES POR LITRO", "UPL"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let now = chrono::Utc::now().fixed_offset();
        let mut insert = Query::insert();
        insert.into_table(MeasurementUnits::Table).columns([
            MeasurementUnits::Name,
            MeasurementUnits::Symbol,
            MeasurementUnits::CreationTime,
            MeasurementUnits::IsDeleted,
        ]);
        for (name, symbol) in UNITS {
            insert
                .values([(*name).into(), (*symbol).into(), now.into(), false.into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete().from_table(MeasurementUnits::Table).to_owned();
        manager.exec_stmt(delete).await
    }
}

#[derive(DeriveIden)]
enum MeasurementUnits { Table, Name, Symbol, CreationTime, IsDeleted }

#[cfg(test)]
mod tests {
    use super::UNITS;

    #[test]
    fn unidad_is_the_54th_unit() {
        assert_eq!(UNITS[53], ("UNIDAD", "NIU"));
    }

    #[test]
    fn catalogue_has_94_units() {
        assert_eq!(UNITS.len(), 94);
    }

    #[test]
    fn names_are_uppercase() {
        assert!(UNITS.iter().all(|(name, _)| name.to_uppercase() == *name));
    }
}
