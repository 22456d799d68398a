use super::countries::CountryCode;
use serde::{Deserialize, Serialize};

/// 翻訳キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TranslationKey {
    StatsTotal,
    StatsActiveSubs,
    StatsRemaining,
    StatsNextPayment,
    StatsNoPayment,
    StatsOn,
    CalendarAdd,
    ListTitle,
    ListCount,
    ListEmptyTitle,
    ListEmptyDesc,
    ListOn,
    FormEditTitle,
    FormAddTitle,
    FormSearchPlaceholder,
    FormNotInList,
    FormCreateManual,
    FormNameLabel,
    FormPriceLabel,
    FormDayLabel,
    FormCategoryLabel,
    FormChangeService,
    FormSave,
    FormAdd,
    CatEntertainment,
    CatUtilities,
    CatWork,
    CatHealth,
    CatTransport,
    CatFood,
    CatOther,
}

impl TranslationKey {
    /// ドット区切りのキー文字列（翻訳が見つからない場合の表示にも使う）
    pub fn as_str(&self) -> &'static str {
        use TranslationKey::*;
        match self {
            StatsTotal => "stats.total",
            StatsActiveSubs => "stats.active_subs",
            StatsRemaining => "stats.remaining",
            StatsNextPayment => "stats.next_payment",
            StatsNoPayment => "stats.no_payment",
            StatsOn => "stats.on",
            CalendarAdd => "calendar.add",
            ListTitle => "list.title",
            ListCount => "list.count",
            ListEmptyTitle => "list.empty_title",
            ListEmptyDesc => "list.empty_desc",
            ListOn => "list.on",
            FormEditTitle => "form.edit_title",
            FormAddTitle => "form.add_title",
            FormSearchPlaceholder => "form.search_placeholder",
            FormNotInList => "form.not_in_list",
            FormCreateManual => "form.create_manual",
            FormNameLabel => "form.name_label",
            FormPriceLabel => "form.price_label",
            FormDayLabel => "form.day_label",
            FormCategoryLabel => "form.category_label",
            FormChangeService => "form.change_service",
            FormSave => "form.save",
            FormAdd => "form.add",
            CatEntertainment => "cat.entertainment",
            CatUtilities => "cat.utilities",
            CatWork => "cat.work",
            CatHealth => "cat.health",
            CatTransport => "cat.transport",
            CatFood => "cat.food",
            CatOther => "cat.other",
        }
    }
}

type Table = &'static [(TranslationKey, &'static str)];

const FRENCH: Table = &[
    (TranslationKey::StatsTotal, "Total Mensuel"),
    (TranslationKey::StatsActiveSubs, "abonnements actifs"),
    (TranslationKey::StatsRemaining, "Reste à payer"),
    (TranslationKey::StatsNextPayment, "Prochain Prélèvement"),
    (TranslationKey::StatsNoPayment, "Aucun prélèvement à venir"),
    (TranslationKey::StatsOn, "Le"),
    (TranslationKey::CalendarAdd, "Ajouter"),
    (TranslationKey::ListTitle, "Vos Abonnements"),
    (TranslationKey::ListCount, "services"),
    (TranslationKey::ListEmptyTitle, "Aucun abonnement"),
    (TranslationKey::ListEmptyDesc, "Ajoutez-en un pour commencer"),
    (TranslationKey::ListOn, "Le"),
    (TranslationKey::FormEditTitle, "Modifier"),
    (TranslationKey::FormAddTitle, "Ajouter un service"),
    (TranslationKey::FormSearchPlaceholder, "Rechercher un service"),
    (TranslationKey::FormNotInList, "Pas dans la liste ?"),
    (TranslationKey::FormCreateManual, "Créer manuellement"),
    (TranslationKey::FormNameLabel, "Nom du service"),
    (TranslationKey::FormPriceLabel, "Prix Mensuel"),
    (TranslationKey::FormDayLabel, "Jour du mois"),
    (TranslationKey::FormCategoryLabel, "Catégorie"),
    (TranslationKey::FormChangeService, "Changer de service"),
    (TranslationKey::FormSave, "Sauvegarder"),
    (TranslationKey::FormAdd, "Ajouter au calendrier"),
    (TranslationKey::CatEntertainment, "Divertissement"),
    (TranslationKey::CatUtilities, "Factures & Énergie"),
    (TranslationKey::CatWork, "Pro & Tech"),
    (TranslationKey::CatHealth, "Santé & Bien-être"),
    (TranslationKey::CatTransport, "Transport"),
    (TranslationKey::CatFood, "Alimentation"),
    (TranslationKey::CatOther, "Autre"),
];

// US / UK / GLOBAL で共通
const ENGLISH: Table = &[
    (TranslationKey::StatsTotal, "Monthly Total"),
    (TranslationKey::StatsActiveSubs, "active subs"),
    (TranslationKey::StatsRemaining, "Remaining"),
    (TranslationKey::StatsNextPayment, "Next Payment"),
    (TranslationKey::StatsNoPayment, "No upcoming payments"),
    (TranslationKey::StatsOn, "On"),
    (TranslationKey::CalendarAdd, "Add"),
    (TranslationKey::ListTitle, "Your Subscriptions"),
    (TranslationKey::ListCount, "services"),
    (TranslationKey::ListEmptyTitle, "No subscriptions"),
    (TranslationKey::ListEmptyDesc, "Add one to get started"),
    (TranslationKey::ListOn, "On"),
    (TranslationKey::FormEditTitle, "Edit"),
    (TranslationKey::FormAddTitle, "Add Service"),
    (TranslationKey::FormSearchPlaceholder, "Search for a service"),
    (TranslationKey::FormNotInList, "Not in the list?"),
    (TranslationKey::FormCreateManual, "Create manually"),
    (TranslationKey::FormNameLabel, "Service Name"),
    (TranslationKey::FormPriceLabel, "Monthly Price"),
    (TranslationKey::FormDayLabel, "Day of Month"),
    (TranslationKey::FormCategoryLabel, "Category"),
    (TranslationKey::FormChangeService, "Change service"),
    (TranslationKey::FormSave, "Save Changes"),
    (TranslationKey::FormAdd, "Add to Calendar"),
    (TranslationKey::CatEntertainment, "Entertainment"),
    (TranslationKey::CatUtilities, "Utilities"),
    (TranslationKey::CatWork, "Work & Tech"),
    (TranslationKey::CatHealth, "Health"),
    (TranslationKey::CatTransport, "Transport"),
    (TranslationKey::CatFood, "Food"),
    (TranslationKey::CatOther, "Other"),
];

const GERMAN: Table = &[
    (TranslationKey::StatsTotal, "Monatliche Gesamtsumme"),
    (TranslationKey::StatsActiveSubs, "aktive Abos"),
    (TranslationKey::StatsRemaining, "Verbleibend"),
    (TranslationKey::StatsNextPayment, "Nächste Zahlung"),
    (TranslationKey::StatsNoPayment, "Keine anstehenden Zahlungen"),
    (TranslationKey::StatsOn, "Am"),
    (TranslationKey::CalendarAdd, "Hinzufügen"),
    (TranslationKey::ListTitle, "Deine Abos"),
    (TranslationKey::ListCount, "Dienste"),
    (TranslationKey::ListEmptyTitle, "Keine Abonnements"),
    (TranslationKey::ListEmptyDesc, "Füge eins hinzu, um zu starten"),
    (TranslationKey::ListOn, "Am"),
    (TranslationKey::FormEditTitle, "Bearbeiten"),
    (TranslationKey::FormAddTitle, "Dienst hinzufügen"),
    (TranslationKey::FormSearchPlaceholder, "Suche nach einem Dienst"),
    (TranslationKey::FormNotInList, "Nicht in der Liste?"),
    (TranslationKey::FormCreateManual, "Manuell erstellen"),
    (TranslationKey::FormNameLabel, "Dienstname"),
    (TranslationKey::FormPriceLabel, "Monatlicher Preis"),
    (TranslationKey::FormDayLabel, "Tag des Monats"),
    (TranslationKey::FormCategoryLabel, "Kategorie"),
    (TranslationKey::FormChangeService, "Dienst ändern"),
    (TranslationKey::FormSave, "Speichern"),
    (TranslationKey::FormAdd, "Zum Kalender hinzufügen"),
    (TranslationKey::CatEntertainment, "Unterhaltung"),
    (TranslationKey::CatUtilities, "Rechnungen"),
    (TranslationKey::CatWork, "Arbeit & Tech"),
    (TranslationKey::CatHealth, "Gesundheit"),
    (TranslationKey::CatTransport, "Transport"),
    (TranslationKey::CatFood, "Essen"),
    (TranslationKey::CatOther, "Andere"),
];

const SPANISH: Table = &[
    (TranslationKey::StatsTotal, "Total Mensual"),
    (TranslationKey::StatsActiveSubs, "suscripciones activas"),
    (TranslationKey::StatsRemaining, "Restante"),
    (TranslationKey::StatsNextPayment, "Próximo Pago"),
    (TranslationKey::StatsNoPayment, "No hay pagos próximos"),
    (TranslationKey::StatsOn, "El"),
    (TranslationKey::CalendarAdd, "Añadir"),
    (TranslationKey::ListTitle, "Tus Suscripciones"),
    (TranslationKey::ListCount, "servicios"),
    (TranslationKey::ListEmptyTitle, "Sin suscripciones"),
    (TranslationKey::ListEmptyDesc, "Añade una para empezar"),
    (TranslationKey::ListOn, "El"),
    (TranslationKey::FormEditTitle, "Editar"),
    (TranslationKey::FormAddTitle, "Añadir Servicio"),
    (TranslationKey::FormSearchPlaceholder, "Buscar un servicio"),
    (TranslationKey::FormNotInList, "¿No está en la lista?"),
    (TranslationKey::FormCreateManual, "Crear manualmente"),
    (TranslationKey::FormNameLabel, "Nombre del servicio"),
    (TranslationKey::FormPriceLabel, "Precio Mensual"),
    (TranslationKey::FormDayLabel, "Día del mes"),
    (TranslationKey::FormCategoryLabel, "Categoría"),
    (TranslationKey::FormChangeService, "Cambiar servicio"),
    (TranslationKey::FormSave, "Guardar"),
    (TranslationKey::FormAdd, "Añadir al calendario"),
    (TranslationKey::CatEntertainment, "Entretenimiento"),
    (TranslationKey::CatUtilities, "Facturas"),
    (TranslationKey::CatWork, "Trabajo & Tech"),
    (TranslationKey::CatHealth, "Salud"),
    (TranslationKey::CatTransport, "Transporte"),
    (TranslationKey::CatFood, "Comida"),
    (TranslationKey::CatOther, "Otro"),
];

const ITALIAN: Table = &[
    (TranslationKey::StatsTotal, "Totale Mensile"),
    (TranslationKey::StatsActiveSubs, "abbonamenti attivi"),
    (TranslationKey::StatsRemaining, "Rimanente"),
    (TranslationKey::StatsNextPayment, "Prossimo Pagamento"),
    (TranslationKey::StatsNoPayment, "Nessun pagamento imminente"),
    (TranslationKey::StatsOn, "Il"),
    (TranslationKey::CalendarAdd, "Aggiungi"),
    (TranslationKey::ListTitle, "I tuoi Abbonamenti"),
    (TranslationKey::ListCount, "servizi"),
    (TranslationKey::ListEmptyTitle, "Nessun abbonamento"),
    (TranslationKey::ListEmptyDesc, "Aggiungine uno per iniziare"),
    (TranslationKey::ListOn, "Il"),
    (TranslationKey::FormEditTitle, "Modifica"),
    (TranslationKey::FormAddTitle, "Aggiungi Servizio"),
    (TranslationKey::FormSearchPlaceholder, "Cerca un servizio"),
    (TranslationKey::FormNotInList, "Non in lista?"),
    (TranslationKey::FormCreateManual, "Crea manualmente"),
    (TranslationKey::FormNameLabel, "Nome del servizio"),
    (TranslationKey::FormPriceLabel, "Prezzo Mensile"),
    (TranslationKey::FormDayLabel, "Giorno del mese"),
    (TranslationKey::FormCategoryLabel, "Categoria"),
    (TranslationKey::FormChangeService, "Cambia servizio"),
    (TranslationKey::FormSave, "Salva"),
    (TranslationKey::FormAdd, "Aggiungi al calendario"),
    (TranslationKey::CatEntertainment, "Intrattenimento"),
    (TranslationKey::CatUtilities, "Bollette"),
    (TranslationKey::CatWork, "Lavoro & Tech"),
    (TranslationKey::CatHealth, "Salute"),
    (TranslationKey::CatTransport, "Trasporti"),
    (TranslationKey::CatFood, "Cibo"),
    (TranslationKey::CatOther, "Altro"),
];

/// 国ごとの翻訳テーブルを取得する
pub fn table_for(country: CountryCode) -> Table {
    match country {
        CountryCode::Fr => FRENCH,
        CountryCode::Us | CountryCode::Uk | CountryCode::Global => ENGLISH,
        CountryCode::De => GERMAN,
        CountryCode::Es => SPANISH,
        CountryCode::It => ITALIAN,
    }
}

/// テーブルからキーを検索する
pub fn lookup(table: Table, key: TranslationKey) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}

/// 翻訳を解決する
///
/// 国のテーブル → 英語（US） → フランス語 → キー文字列の順に探す
pub fn translate(country: CountryCode, key: TranslationKey) -> &'static str {
    lookup(table_for(country), key)
        .or_else(|| lookup(ENGLISH, key))
        .or_else(|| lookup(FRENCH, key))
        .unwrap_or_else(|| key.as_str())
}
